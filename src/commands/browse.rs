use std::future::Future;
use std::pin::Pin;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::models::RawEmailRecord;
use crate::cli::{self, BrowseArgs, MATCH_ALL_SHORTHAND};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::OutputMode;
use crate::pipeline::filter::{KNOWN_CATEGORIES, MATCH_ALL, PAGE_SIZE_CHOICES, PRIORITY_CHOICES};
use crate::pipeline::{EmailSource, Feed, RetrievalTicket};

const COMMANDS: &str = "commands: more | category <name|*> | priority <score|*> | count <n> | days <n> | max <n> | refresh | show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Noop,
    More,
    Category(String),
    Priority(String),
    Count(usize),
    Days(u32),
    Max(u32),
    Refresh,
    Show,
    Help,
    Quit,
}

pub async fn run(ctx: &AppContext, args: BrowseArgs) -> AppResult<()> {
    let params = args.retrieval.resolve(ctx.settings.retrieval_params()?)?;
    let mut feed = Feed::new(
        ctx.client.clone(),
        params,
        ctx.settings.page_size(),
        ctx.settings.reveal_step(),
    )?;

    if ctx.output.mode() == OutputMode::Text {
        println!("{}", help_text());
    }
    let mut pending = Some(start(&mut feed));
    render(ctx, &feed)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            (ticket, result) = settle(&mut pending) => {
                pending = None;
                feed.finish(ticket, result);
                render(ctx, &feed)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(err) => {
                        eprintln!("error: {err}");
                        continue;
                    }
                };

                match command {
                    BrowseCommand::Noop => continue,
                    BrowseCommand::Quit => break,
                    BrowseCommand::Help => {
                        println!("{}", help_text());
                        continue;
                    }
                    command => match apply(&mut feed, command) {
                        Ok(true) => pending = Some(start(&mut feed)),
                        Ok(false) => {}
                        Err(err) => {
                            eprintln!("error: {err}");
                            continue;
                        }
                    },
                }

                render(ctx, &feed)?;
            }
        }
    }

    Ok(())
}

fn start<S: EmailSource>(
    feed: &mut Feed<S>,
) -> (
    RetrievalTicket,
    Pin<Box<impl Future<Output = AppResult<Vec<RawEmailRecord>>> + use<S>>>,
) {
    let (ticket, fetch) = feed.begin_refresh();
    (ticket, Box::pin(fetch))
}

async fn settle<F: Future + Unpin>(
    pending: &mut Option<(RetrievalTicket, F)>,
) -> (RetrievalTicket, F::Output) {
    match pending {
        Some((ticket, fetch)) => (*ticket, fetch.await),
        None => std::future::pending().await,
    }
}

fn apply<S: EmailSource>(feed: &mut Feed<S>, command: BrowseCommand) -> AppResult<bool> {
    match command {
        BrowseCommand::More => feed.reveal_more(),
        BrowseCommand::Category(category) => feed.set_category(cli::selection(&category)),
        BrowseCommand::Priority(priority) => feed.set_priority(cli::selection(&priority))?,
        BrowseCommand::Count(count) => feed.set_visible_count(count)?,
        BrowseCommand::Days(days) => {
            let params = feed.params().with_days(days)?;
            return Ok(feed.update_params(params));
        }
        BrowseCommand::Max(max_results) => {
            let params = feed.params().with_max_results(max_results)?;
            return Ok(feed.update_params(params));
        }
        BrowseCommand::Refresh => return Ok(true),
        BrowseCommand::Show | BrowseCommand::Noop | BrowseCommand::Help | BrowseCommand::Quit => {}
    }

    Ok(false)
}

fn render<S: EmailSource>(ctx: &AppContext, feed: &Feed<S>) -> AppResult<()> {
    ctx.output.emit_page(&feed.page(), feed.state().is_loading())
}

fn help_text() -> String {
    let priorities = PRIORITY_CHOICES
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let counts = PAGE_SIZE_CHOICES
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{COMMANDS}\ncategories: {MATCH_ALL} ({MATCH_ALL_SHORTHAND}), {}\npriorities: {MATCH_ALL} ({MATCH_ALL_SHORTHAND}), {priorities}\ncounts: {counts}",
        KNOWN_CATEGORIES.join(", ")
    )
}

fn parse_command(line: &str) -> AppResult<BrowseCommand> {
    let line = line.trim_start();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };

    let command = match verb {
        "" => BrowseCommand::Noop,
        "more" | "m" => BrowseCommand::More,
        "category" | "c" => BrowseCommand::Category(required(verb, rest)?.to_string()),
        "priority" | "p" => BrowseCommand::Priority(required(verb, rest)?.to_string()),
        "count" => BrowseCommand::Count(number(verb, rest)?),
        "days" => BrowseCommand::Days(number(verb, rest)?),
        "max" => BrowseCommand::Max(number(verb, rest)?),
        "refresh" | "r" => BrowseCommand::Refresh,
        "show" | "s" => BrowseCommand::Show,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => {
            return Err(AppError::InvalidInput(format!(
                "unknown command `{other}`; type `help`"
            )));
        }
    };

    Ok(command)
}

fn required<'a>(verb: &str, rest: &'a str) -> AppResult<&'a str> {
    let value = rest.trim_end_matches(['\r', '\n']);
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("`{verb}` needs a value")));
    }
    Ok(value)
}

fn number<T: std::str::FromStr>(verb: &str, rest: &str) -> AppResult<T> {
    rest.trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("`{verb}` needs a positive number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::RetrievalParams;
    use crate::pipeline::CategoryFilter;
    use crate::pipeline::filter::{INITIAL_VISIBLE_COUNT, REVEAL_STEP};

    struct EmptySource;

    impl EmailSource for EmptySource {
        async fn fetch(&self, _params: &RetrievalParams) -> AppResult<Vec<RawEmailRecord>> {
            Ok(Vec::new())
        }
    }

    fn feed() -> Feed<EmptySource> {
        let params = RetrievalParams::new(7, 10).expect("valid params");
        Feed::new(EmptySource, params, INITIAL_VISIBLE_COUNT, REVEAL_STEP).expect("feed builds")
    }

    #[test]
    fn parses_reveal_and_quit() {
        assert_eq!(parse_command("more").expect("parses"), BrowseCommand::More);
        assert_eq!(parse_command("  q ").expect("parses"), BrowseCommand::Quit);
        assert_eq!(parse_command("").expect("parses"), BrowseCommand::Noop);
    }

    #[test]
    fn keeps_category_text_verbatim() {
        assert_eq!(
            parse_command("category 業務連絡").expect("parses"),
            BrowseCommand::Category("業務連絡".to_string())
        );
        assert_eq!(
            parse_command("category Work ").expect("parses"),
            BrowseCommand::Category("Work ".to_string())
        );
    }

    #[test]
    fn parses_numeric_commands() {
        assert_eq!(parse_command("count 20").expect("parses"), BrowseCommand::Count(20));
        assert_eq!(parse_command("days 3").expect("parses"), BrowseCommand::Days(3));
        assert_eq!(parse_command("max 50").expect("parses"), BrowseCommand::Max(50));
        assert!(parse_command("days -1").is_err());
        assert!(parse_command("count").is_err());
    }

    #[test]
    fn help_lists_choices() {
        let help = help_text();
        assert!(help.contains("業務連絡"));
        assert!(help.contains("1, 2, 3, 4, 5"));
        assert!(help.contains("5, 10, 20, 50"));
    }

    #[test]
    fn rejects_unknown_verbs() {
        assert!(parse_command("delete everything").is_err());
        assert!(parse_command("category").is_err());
    }

    #[test]
    fn only_parameter_changes_start_a_retrieval() {
        let mut feed = feed();

        assert!(!apply(&mut feed, BrowseCommand::More).expect("applies"));
        assert!(!apply(&mut feed, BrowseCommand::Category("重要".to_string())).expect("applies"));
        assert!(!apply(&mut feed, BrowseCommand::Days(7)).expect("applies"));
        assert!(apply(&mut feed, BrowseCommand::Days(3)).expect("applies"));
        assert!(apply(&mut feed, BrowseCommand::Max(25)).expect("applies"));
        assert!(apply(&mut feed, BrowseCommand::Refresh).expect("applies"));
        assert_eq!(feed.params(), RetrievalParams::new(3, 25).expect("valid params"));
        assert!(apply(&mut feed, BrowseCommand::Days(0)).is_err());
    }

    #[test]
    fn star_selects_every_category() {
        let mut feed = feed();

        apply(&mut feed, BrowseCommand::Category("All".to_string())).expect("applies");
        assert_eq!(
            feed.state().filter().category(),
            &CategoryFilter::Exact("All".to_string())
        );

        apply(&mut feed, BrowseCommand::Category("*".to_string())).expect("applies");
        assert_eq!(feed.state().filter().category(), &CategoryFilter::Any);
    }

    #[tokio::test]
    async fn newer_retrieval_replaces_the_pending_one() {
        let mut feed = feed();
        let (stale, _) = start(&mut feed);
        let mut pending = Some(start(&mut feed));

        let (ticket, result) = settle(&mut pending).await;
        assert_ne!(ticket, stale);
        assert!(feed.finish(ticket, result));
        assert!(!feed.snapshot().loading);
    }
}
