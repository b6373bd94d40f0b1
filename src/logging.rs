use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

pub fn init(verbose: u8) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| AppError::Config(format!("failed to initialise logging: {err}")))
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "mailfeed=warn",
        1 => "mailfeed=info",
        2 => "mailfeed=debug",
        _ => "mailfeed=trace",
    }
}
