use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod display;
mod files;
mod search;

use display::DisplaySection;
use files::{ExportSection, HistorySection};
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    search: SearchSection,
    display: DisplaySection,
    history: HistorySection,
    export: ExportSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.search.apply_cli_overrides(cli);
        self.history.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = self.detect_sources(cli);

        let search = self.search.resolve(&sources).map_err(Error::new)?;
        let display = self.display.resolve(&sources).map_err(Error::new)?;
        let history = self.history.resolve()?;
        let export = self.export.resolve(&sources).map_err(Error::new)?;

        Ok(ResolvedConfig {
            search,
            display,
            history,
            export,
            initial_query: cli
                .query
                .clone()
                .filter(|query| !query.trim().is_empty()),
        })
    }

    fn detect_sources(&self, cli: &CliArgs) -> ConfigSources {
        let mut sources = ConfigSources::default();
        sources.record(
            "search.endpoint",
            detect_source(
                cli.endpoint.is_some(),
                self.search.endpoint.is_some(),
                "SCOUR__SEARCH__ENDPOINT",
                Some("--endpoint"),
                "search.endpoint",
            ),
        );
        sources.record(
            "search.country",
            detect_source(
                cli.country.is_some(),
                self.search.country.is_some(),
                "SCOUR__SEARCH__COUNTRY",
                Some("--country"),
                "search.country",
            ),
        );
        sources.record(
            "search.ui_lang",
            detect_source(
                cli.ui_lang.is_some(),
                self.search.ui_lang.is_some(),
                "SCOUR__SEARCH__UI_LANG",
                Some("--ui-lang"),
                "search.ui_lang",
            ),
        );
        sources.record(
            "search.timeout_secs",
            detect_source(
                cli.timeout.is_some(),
                self.search.timeout_secs.is_some(),
                "SCOUR__SEARCH__TIMEOUT_SECS",
                Some("--timeout"),
                "search.timeout_secs",
            ),
        );
        sources.record(
            "display.summary_limit",
            detect_source(
                false,
                self.display.summary_limit.is_some(),
                "SCOUR__DISPLAY__SUMMARY_LIMIT",
                None,
                "display.summary_limit",
            ),
        );
        sources.record(
            "display.snippet_preview_chars",
            detect_source(
                false,
                self.display.snippet_preview_chars.is_some(),
                "SCOUR__DISPLAY__SNIPPET_PREVIEW_CHARS",
                None,
                "display.snippet_preview_chars",
            ),
        );
        sources.record(
            "display.snippet_limit",
            detect_source(
                false,
                self.display.snippet_limit.is_some(),
                "SCOUR__DISPLAY__SNIPPET_LIMIT",
                None,
                "display.snippet_limit",
            ),
        );
        sources.record(
            "export.file_name",
            detect_source(
                false,
                self.export.file_name.is_some(),
                "SCOUR__EXPORT__FILE_NAME",
                None,
                "export.file_name",
            ),
        );
        sources
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: Option<&'static str>,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if let Some(flag) = cli_flag
        && cli_present
    {
        return Some(SettingSource::CliFlag(flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
