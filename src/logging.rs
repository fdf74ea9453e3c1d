//! Log subscriber setup.
//!
//! The interactive UI owns the terminal, so its logs go to a file in the data
//! directory. Headless commands write to stderr instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "SCOUR_LOG";

const DEFAULT_DIRECTIVES: &str = "scour=info";

/// Where log records should be written.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Append to the given file, creating parent directories as needed.
    File(PathBuf),
    /// Write to standard error.
    Stderr,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global `tracing` subscriber.
///
/// Calling this more than once returns an error from the second call onwards;
/// the first subscriber stays in place.
pub fn initialize(target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };

    installed.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
