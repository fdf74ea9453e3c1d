//! Resolve configuration and data directories for `scour`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "scour";

const CONFIG_DIR_ENV: &str = "SCOUR_CONFIG_DIR";
const DATA_DIR_ENV: &str = "SCOUR_DATA_DIR";

/// File name of the persisted recent-search list inside the data directory.
pub const HISTORY_FILE_NAME: &str = "recent_searches.json";

/// File name of the log written while the interactive UI owns the terminal.
pub const LOG_FILE_NAME: &str = "scour.log";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for scour"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers can
/// use shell defaults without worrying about trailing whitespace.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Return the configuration directory used to persist user preferences.
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory that stores the search history and logs.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Default location of the persisted history file.
pub fn default_history_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(HISTORY_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_path_lives_in_data_dir() {
        let Ok(data) = get_data_dir() else {
            return;
        };
        let history = default_history_path().expect("history path");
        assert_eq!(history.parent(), Some(data.as_path()));
        assert!(history.ends_with(HISTORY_FILE_NAME));
    }
}
