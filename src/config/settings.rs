use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_BASE_URL;
use crate::api::models::RetrievalParams;
use crate::error::{AppError, AppResult};
use crate::pipeline::filter::{INITIAL_VISIBLE_COUNT, REVEAL_STEP};

pub const BASE_URL_ENV: &str = "MAILFEED_BASE_URL";

const DEFAULT_DAYS: u32 = 7;
const DEFAULT_MAX_RESULTS: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub max_results: Option<u32>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub reveal_step: Option<usize>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn with_base_url_override(mut self, value: Option<String>) -> Self {
        let value = value
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        if value.is_some() {
            self.base_url = value;
        }
        self
    }

    pub fn retrieval_params(&self) -> AppResult<RetrievalParams> {
        RetrievalParams::new(
            self.days.unwrap_or(DEFAULT_DAYS),
            self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        )
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(INITIAL_VISIBLE_COUNT)
    }

    pub fn reveal_step(&self) -> usize {
        self.reveal_step.unwrap_or(REVEAL_STEP)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> AppResult<()> {
        let zero = [
            ("days", self.days.map(u64::from)),
            ("max_results", self.max_results.map(u64::from)),
            ("page_size", self.page_size.map(|value| value as u64)),
            ("reveal_step", self.reveal_step.map(|value| value as u64)),
            ("timeout_secs", self.timeout_secs),
        ]
        .into_iter()
        .find(|(_, value)| *value == Some(0));

        if let Some((name, _)) = zero {
            return Err(AppError::Config(format!("{name} must be greater than 0")));
        }

        Ok(())
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&raw)?;
    settings.validate()?;
    Ok(settings)
}
