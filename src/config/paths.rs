use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "mailfeed";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    profiles_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        Self::create(config_root.join(APP_DIR))
    }

    pub fn create(config_dir: PathBuf) -> AppResult<Self> {
        let profiles_dir = config_dir.join("profiles");
        fs::create_dir_all(&profiles_dir)?;

        Ok(Self {
            config_dir,
            profiles_dir,
        })
    }

    pub fn settings_file(&self, profile: &str) -> PathBuf {
        self.profiles_dir.join(format!("{profile}.json"))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
