use clap::{ArgAction, Args, Parser, Subcommand};

use crate::api::models::RetrievalParams;
use crate::error::AppResult;
use crate::pipeline::filter::MATCH_ALL;

pub const MATCH_ALL_SHORTHAND: &str = "*";

#[derive(Debug, Parser)]
#[command(
    name = "mailfeed",
    version,
    about = "Browse classified email from an email-listing service"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Fetch once and print one page")]
    List(ListArgs),
    #[command(about = "Fetch and filter interactively from stdin")]
    Browse(BrowseArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RetrievalArgs {
    #[arg(long, help = "Lookback window in days")]
    pub days: Option<u32>,
    #[arg(long, help = "Maximum records to retrieve")]
    pub max_results: Option<u32>,
}

impl RetrievalArgs {
    pub fn resolve(&self, defaults: RetrievalParams) -> AppResult<RetrievalParams> {
        RetrievalParams::new(
            self.days.unwrap_or(defaults.days()),
            self.max_results.unwrap_or(defaults.max_results()),
        )
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub retrieval: RetrievalArgs,
    #[arg(long, help = "Category to show (`*` for every category)")]
    pub category: Option<String>,
    #[arg(long, help = "Priority score to show (`*` for every score)")]
    pub priority: Option<String>,
    #[arg(long, help = "Number of records to show")]
    pub count: Option<usize>,
    #[arg(long, default_value_t = 0, help = "Reveal more records this many times")]
    pub more: u32,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub retrieval: RetrievalArgs,
}

pub fn selection(input: &str) -> &str {
    if input == MATCH_ALL_SHORTHAND {
        MATCH_ALL
    } else {
        input
    }
}
