use crate::api::client::EmailClient;
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub verbose: u8,
    pub paths: AppPaths,
    pub settings: Settings,
    pub client: EmailClient,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: String, json: bool, verbose: u8) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile)?;
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?;
        let client = EmailClient::new(settings.base_url(), settings.timeout())?;
        let output = Output::new(json);

        tracing::debug!(profile = %profile, base_url = %client.base_url(), "context ready");

        Ok(Self {
            profile,
            verbose,
            paths,
            settings,
            client,
            output,
        })
    }
}
