pub mod paths;
pub mod profile;
pub mod settings;

pub use paths::AppPaths;
pub use profile::resolve_profile;
pub use settings::Settings;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths, profile: &str) -> AppResult<Settings> {
    let settings = settings::load(&paths.settings_file(profile))?
        .with_base_url_override(std::env::var(settings::BASE_URL_ENV).ok());
    Ok(settings)
}
