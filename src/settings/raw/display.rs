use serde::Deserialize;

use scour::controller::DisplayLimits;

use crate::settings::resolved::{ConfigError, ConfigSources, validation};

/// `[display]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DisplaySection {
    pub(super) summary_limit: Option<usize>,
    pub(super) snippet_preview_chars: Option<usize>,
    pub(super) snippet_limit: Option<usize>,
}

impl DisplaySection {
    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<DisplayLimits, ConfigError> {
        let defaults = DisplayLimits::default();
        let limit = |key: &'static str, value: Option<usize>, default| match value {
            Some(value) => validation::limit(key, value, sources.source_for(key)),
            None => Ok(default),
        };

        Ok(DisplayLimits {
            summary_limit: limit(
                "display.summary_limit",
                self.summary_limit,
                defaults.summary_limit,
            )?,
            snippet_preview_chars: limit(
                "display.snippet_preview_chars",
                self.snippet_preview_chars,
                defaults.snippet_preview_chars,
            )?,
            snippet_limit: limit(
                "display.snippet_limit",
                self.snippet_limit,
                defaults.snippet_limit,
            )?,
        })
    }
}
