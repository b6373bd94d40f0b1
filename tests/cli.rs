use clap::Parser;
use mailfeed::api::models::RetrievalParams;
use mailfeed::cli::{self, Cli, Command};
use mailfeed::pipeline::filter::MATCH_ALL;

#[test]
fn parses_list_with_filters() {
    let cli = Cli::try_parse_from([
        "mailfeed",
        "list",
        "--days",
        "3",
        "--max-results",
        "25",
        "--category",
        "業務連絡",
        "--priority",
        "3",
        "--count",
        "20",
        "--more",
        "2",
    ])
    .expect("cli parse should work");

    match cli.command {
        Command::List(list) => {
            assert_eq!(list.retrieval.days, Some(3));
            assert_eq!(list.retrieval.max_results, Some(25));
            assert_eq!(list.category.as_deref(), Some("業務連絡"));
            assert_eq!(list.priority.as_deref(), Some("3"));
            assert_eq!(list.count, Some(20));
            assert_eq!(list.more, 2);
        }
        _ => panic!("expected list command"),
    }
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["mailfeed", "browse", "--json", "-vv", "--profile", "work"])
        .expect("cli parse should work");

    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.profile, "work");
    assert!(matches!(cli.command, Command::Browse(_)));
}

#[test]
fn flags_override_profile_retrieval_params() {
    let cli = Cli::try_parse_from(["mailfeed", "list", "--days", "14"])
        .expect("cli parse should work");
    let defaults = RetrievalParams::new(7, 10).expect("valid params");

    match cli.command {
        Command::List(list) => {
            let params = list.retrieval.resolve(defaults).expect("params resolve");
            assert_eq!(params.days(), 14);
            assert_eq!(params.max_results(), 10);
        }
        _ => panic!("expected list command"),
    }
}

#[test]
fn zero_days_flag_is_rejected_on_resolve() {
    let cli =
        Cli::try_parse_from(["mailfeed", "list", "--days", "0"]).expect("cli parse should work");
    let defaults = RetrievalParams::new(7, 10).expect("valid params");

    match cli.command {
        Command::List(list) => assert!(list.retrieval.resolve(defaults).is_err()),
        _ => panic!("expected list command"),
    }
}

#[test]
fn rejects_negative_days() {
    assert!(Cli::try_parse_from(["mailfeed", "list", "--days", "-1"]).is_err());
}

#[test]
fn star_selects_every_value_but_other_text_is_kept() {
    assert_eq!(cli::selection("*"), MATCH_ALL);
    assert_eq!(cli::selection(MATCH_ALL), MATCH_ALL);
    assert_eq!(cli::selection("All"), "All");
    assert_eq!(cli::selection("all"), "all");
}
