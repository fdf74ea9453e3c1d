//! Recent-search history.
//!
//! The store keeps at most [`MAX_ENTRIES`] queries, most recent first, with one
//! entry per distinct query. Every mutation writes the whole list back to its
//! [`HistoryStorage`] before returning. Storage failures never reach the
//! caller: they are logged and the in-memory list stays authoritative.

mod storage;
#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use storage::{HistoryStorage, JsonFileStorage, MemoryStorage};

/// Upper bound on the number of remembered queries.
pub const MAX_ENTRIES: usize = 8;

/// A past query and the title of its top result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub query: String,
    pub time: DateTime<Utc>,
    pub top_result_title: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(query: impl Into<String>, time: DateTime<Utc>, top_result_title: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            time,
            top_result_title: top_result_title.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("history is not a valid entry list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("history entry {index} is invalid: {reason}")]
    Shape { index: usize, reason: &'static str },
}

/// Parse and validate a persisted history document.
///
/// The document must be a JSON array of objects carrying `query`, `time` and
/// `topResultTitle`. Queries must be non-empty and trimmed. Duplicate queries
/// keep their first (most recent) occurrence and the list is capped at
/// [`MAX_ENTRIES`].
pub fn parse(contents: &str) -> Result<Vec<HistoryEntry>, HistoryError> {
    let parsed: Vec<HistoryEntry> = serde_json::from_str(contents)?;
    let mut entries: Vec<HistoryEntry> = Vec::with_capacity(parsed.len().min(MAX_ENTRIES));
    for (index, entry) in parsed.into_iter().enumerate() {
        if entry.query.is_empty() {
            return Err(HistoryError::Shape {
                index,
                reason: "query is empty",
            });
        }
        if entry.query.trim() != entry.query {
            return Err(HistoryError::Shape {
                index,
                reason: "query has surrounding whitespace",
            });
        }
        if entries.iter().any(|existing| existing.query == entry.query) {
            continue;
        }
        entries.push(entry);
    }
    entries.truncate(MAX_ENTRIES);
    Ok(entries)
}

/// Read the persisted history, treating absent or malformed data as empty.
pub fn load(storage: &dyn HistoryStorage) -> Vec<HistoryEntry> {
    let contents = match storage.read() {
        Ok(Some(contents)) if !contents.trim().is_empty() => contents,
        Ok(_) => return Vec::new(),
        Err(err) => {
            warn!(error = %err, "failed to read search history; starting empty");
            return Vec::new();
        }
    };

    match parse(&contents) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(error = %err, "discarding malformed search history");
            Vec::new()
        }
    }
}

/// Bounded, deduplicated, persisted list of recent queries.
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    storage: Box<dyn HistoryStorage>,
}

impl HistoryStore {
    /// Load the store from `storage`.
    pub fn open(storage: Box<dyn HistoryStorage>) -> Self {
        let entries = load(storage.as_ref());
        debug!(count = entries.len(), "loaded search history");
        Self { entries, storage }
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a completed search, timestamped now.
    pub fn record(&mut self, query: &str, first_result_title: &str) -> &[HistoryEntry] {
        self.record_at(query, first_result_title, Utc::now())
    }

    /// Record a completed search with an explicit timestamp.
    pub fn record_at(
        &mut self,
        query: &str,
        first_result_title: &str,
        time: DateTime<Utc>,
    ) -> &[HistoryEntry] {
        let query = query.trim();
        if query.is_empty() {
            return &self.entries;
        }
        self.promote(HistoryEntry::new(query, time, first_result_title));
        self.persist();
        &self.entries
    }

    /// Move `entry` to the front as-is.
    ///
    /// `time` and `top_result_title` are left alone here; they are refreshed by
    /// [`HistoryStore::record`] once the re-run search completes.
    pub fn touch(&mut self, entry: &HistoryEntry) -> &[HistoryEntry] {
        self.promote(entry.clone());
        self.persist();
        &self.entries
    }

    fn promote(&mut self, entry: HistoryEntry) {
        self.entries.retain(|existing| existing.query != entry.query);
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(HistoryError::from)
            .and_then(|json| self.storage.write(&json).map_err(HistoryError::from));
        if let Err(err) = result {
            warn!(error = %err, "failed to persist search history; keeping it in memory");
        }
    }
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
