use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose)?;
    let ctx = AppContext::bootstrap(profile, json, verbose)?;

    match command {
        Command::List(args) => commands::list::run(&ctx, args).await,
        Command::Browse(args) => commands::browse::run(&ctx, args).await,
    }
}
