//! Exporting the visible summary to a document.
//!
//! The controller collects a [`PrintableRegion`] from what is currently on
//! screen and hands it to a [`DocumentExporter`]. [`PagedTextExporter`] is the
//! built-in renderer; other formats plug in behind the same trait.

mod paged;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use paged::{PAGE_LINES, PAGE_WIDTH, PagedTextExporter, paginate, wrap};

/// Heading printed above the exported summary.
pub const SUMMARY_HEADING: &str = "Combined Summary";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    NothingToExport,
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The part of the screen that gets exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintableRegion {
    pub heading: String,
    /// Summary text exactly as currently displayed.
    pub body: String,
    /// Link to the primary source, when there is one.
    pub source: Option<String>,
}

impl PrintableRegion {
    #[must_use]
    pub fn summary(body: impl Into<String>, source: Option<String>) -> Self {
        Self {
            heading: SUMMARY_HEADING.to_string(),
            body: body.into(),
            source: source.filter(|url| !url.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Renders a printable region to a file and reports where it went.
pub trait DocumentExporter: Send {
    fn export(&self, region: &PrintableRegion) -> Result<PathBuf, ExportError>;
}
