use std::path::PathBuf;
use std::time::Duration;

use scour::controller::DisplayLimits;
use scour::session::{Country, UiLanguage};

mod errors;
mod sources;
mod summary;
pub(crate) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// How to reach the search service.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub endpoint: String,
    pub country: Country,
    pub ui_lang: UiLanguage,
    pub timeout: Duration,
}

/// Where recent searches live.
#[derive(Debug, Clone)]
pub struct HistorySettings {
    pub path: PathBuf,
    /// When unset, history is kept in memory for this run only.
    pub persist: bool,
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub directory: PathBuf,
    pub file_name: String,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub search: SearchSettings,
    pub display: DisplayLimits,
    pub history: HistorySettings,
    pub export: ExportSettings,
    pub initial_query: Option<String>,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        print!("{}", summary::format_summary(self));
    }
}
