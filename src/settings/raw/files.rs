use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use scour::app_dirs;

use crate::cli::CliArgs;
use crate::settings::resolved::{
    ConfigError, ConfigSources, ExportSettings, HistorySettings, validation,
};

pub(super) const DEFAULT_EXPORT_FILE: &str = "research-summary.txt";

/// `[history]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct HistorySection {
    pub(super) path: Option<PathBuf>,
    pub(super) persist: Option<bool>,
}

impl HistorySection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if cli.ephemeral_history {
            self.persist = Some(false);
        }
    }

    pub(super) fn resolve(self) -> Result<HistorySettings> {
        let path = match self.path {
            Some(path) => path,
            None => app_dirs::default_history_path()?,
        };
        Ok(HistorySettings {
            path,
            persist: self.persist.unwrap_or(true),
        })
    }
}

/// `[export]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ExportSection {
    pub(super) directory: Option<PathBuf>,
    pub(super) file_name: Option<String>,
}

impl ExportSection {
    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ExportSettings, ConfigError> {
        let file_name = validation::file_name(
            self.file_name.as_deref().unwrap_or(DEFAULT_EXPORT_FILE),
            sources.source_for("export.file_name"),
        )?;
        Ok(ExportSettings {
            directory: self.directory.unwrap_or_else(|| PathBuf::from(".")),
            file_name,
        })
    }
}
