use std::time::Duration;

use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources, SearchSettings, validation};

pub(super) const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `[search]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
    pub(super) endpoint: Option<String>,
    pub(super) country: Option<String>,
    pub(super) ui_lang: Option<String>,
    pub(super) timeout_secs: Option<u64>,
}

impl SearchSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(endpoint) = cli.endpoint.clone() {
            self.endpoint = Some(endpoint);
        }
        if let Some(country) = cli.country.clone() {
            self.country = Some(country);
        }
        if let Some(ui_lang) = cli.ui_lang.clone() {
            self.ui_lang = Some(ui_lang);
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = Some(timeout);
        }
    }

    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<SearchSettings, ConfigError> {
        let endpoint = validation::endpoint(
            self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
            sources.source_for("search.endpoint"),
        )?;
        let country = match self.country {
            Some(value) => validation::country(&value, sources.source_for("search.country"))?,
            None => Default::default(),
        };
        let ui_lang = match self.ui_lang {
            Some(value) => validation::ui_lang(&value, sources.source_for("search.ui_lang"))?,
            None => Default::default(),
        };
        let timeout_secs = validation::positive(
            "search.timeout_secs",
            self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            sources.source_for("search.timeout_secs"),
        )?;

        Ok(SearchSettings {
            endpoint,
            country,
            ui_lang,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
