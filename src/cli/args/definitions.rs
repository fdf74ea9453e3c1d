use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `scour` binary.
#[derive(Parser, Debug)]
#[command(
    name = "scour",
    version,
    long_version = long_version(),
    about = "Terminal research assistant backed by a search/summarization service",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SCOUR_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'e',
        long,
        value_name = "URL",
        help = "Base URL of the search service (default: http://127.0.0.1:8000)"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        long,
        value_name = "CODE",
        help = "Region passed to the service: US, BE, IN, FR or DE (default: US)"
    )]
    pub(crate) country: Option<String>,
    #[arg(
        long = "ui-lang",
        value_name = "TAG",
        help = "Interface language: en-US, fr-FR, de-DE, in-US or es-ES (default: en-US)"
    )]
    pub(crate) ui_lang: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Search to run on start (default: none)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short = 't',
        long,
        value_name = "SECS",
        help = "Request timeout in seconds (default: 30)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        long = "ephemeral-history",
        help = "Keep recent searches in memory only (default: disabled)"
    )]
    pub(crate) ephemeral_history: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        long = "history",
        conflicts_with = "batch",
        help = "Print recent searches and exit (default: disabled)"
    )]
    pub(crate) history: bool,
    #[arg(
        short = 'b',
        long = "batch",
        requires = "query",
        help = "Run --query once without the interactive UI (default: disabled)"
    )]
    pub(crate) batch: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how batch results and history are printed"
    )]
    pub(crate) output: OutputFormat,
}
