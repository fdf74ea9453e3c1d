use std::path::PathBuf;

use clap::Parser;
use scour::session::{Country, UiLanguage};

use super::RawConfig;
use super::search::DEFAULT_ENDPOINT;
use crate::cli::CliArgs;

fn parse(args: &[&str]) -> CliArgs {
    let mut argv = vec!["scour"];
    argv.extend_from_slice(args);
    CliArgs::parse_from(argv)
}

#[test]
fn cli_overrides_take_precedence() {
    let cli = parse(&[
        "--endpoint",
        "https://search.example.com",
        "--country",
        "FR",
        "--ui-lang",
        "fr-FR",
        "--timeout",
        "5",
        "--ephemeral-history",
    ]);

    let mut config = RawConfig::default();
    config.search.country = Some("DE".into());
    config.history.persist = Some(true);
    config.apply_cli_overrides(&cli);

    assert_eq!(config.search.endpoint, cli.endpoint);
    assert_eq!(config.search.country.as_deref(), Some("FR"));
    assert_eq!(config.search.ui_lang.as_deref(), Some("fr-FR"));
    assert_eq!(config.search.timeout_secs, Some(5));
    assert_eq!(config.history.persist, Some(false));
}

#[test]
fn defaults_resolve_without_any_input() {
    let cli = parse(&[]);
    let mut config = RawConfig::default();
    config.history.path = Some(PathBuf::from("/tmp/history.json"));
    let resolved = config.resolve(&cli).unwrap();

    assert_eq!(resolved.search.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.search.country, Country::UnitedStates);
    assert_eq!(resolved.search.ui_lang, UiLanguage::EnglishUs);
    assert_eq!(resolved.display.summary_limit.get(), 500);
    assert_eq!(resolved.display.snippet_limit.get(), 1000);
    assert!(resolved.history.persist);
    assert_eq!(resolved.export.file_name, "research-summary.txt");
    assert!(resolved.initial_query.is_none());
}

#[test]
fn invalid_cli_country_names_the_flag() {
    let cli = parse(&["--country", "XX"]);
    let mut config = RawConfig::default();
    config.history.path = Some(PathBuf::from("/tmp/history.json"));
    config.apply_cli_overrides(&cli);

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("search.country"));
    assert!(message.contains("CLI flag `--country`"));
    assert!(message.contains("value: XX"));
}

#[test]
fn zero_limit_from_config_is_rejected() {
    let cli = parse(&[]);
    let mut config = RawConfig::default();
    config.history.path = Some(PathBuf::from("/tmp/history.json"));
    config.display.summary_limit = Some(0);

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("display.summary_limit"));
    assert!(message.contains("configuration key"));
}

#[test]
fn blank_initial_query_is_dropped() {
    let cli = parse(&["--query", "   "]);
    let mut config = RawConfig::default();
    config.history.path = Some(PathBuf::from("/tmp/history.json"));
    assert!(config.resolve(&cli).unwrap().initial_query.is_none());
}
