use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
    CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
    let command = CliArgs::command();
    let mut matches = command.get_matches_from(vec!["scour"]);
    let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
    assert_eq!(parsed.output, OutputFormat::Plain);
    assert!(!parsed.batch);
    assert!(parsed.query.is_none());
}

#[test]
fn batch_requires_a_query() {
    assert!(CliArgs::try_parse_from(["scour", "--batch"]).is_err());
    let parsed =
        CliArgs::try_parse_from(["scour", "--batch", "-q", "climate policy", "-o", "json"]).unwrap();
    assert_eq!(parsed.query.as_deref(), Some("climate policy"));
    assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn history_listing_conflicts_with_batch() {
    assert!(CliArgs::try_parse_from(["scour", "--history", "--batch", "-q", "x"]).is_err());
}
