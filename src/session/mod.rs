//! Search session lifecycle.
//!
//! [`SearchSession`] is the state machine for one query at a time:
//! `Idle -> Loading -> {Success, Failed} -> Idle`. Starting a search hands out
//! a [`SearchTicket`] tagged with a monotonically increasing [`RequestId`];
//! only the completion carrying the most recently issued id is applied, so a
//! slow, older response can never overwrite a newer one.
//!
//! Fetching itself happens elsewhere: [`SearchRuntime`] runs requests against a
//! [`SearchBackend`] on background threads and hands completions back.

mod backend;
mod locale;
mod model;
mod runtime;
#[cfg(test)]
mod tests;
mod worker;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::history::HistoryStore;

pub use backend::{HttpBackend, SearchBackend, SearchError, SearchRequest};
pub use locale::{Country, UiLanguage, UnknownCode};
pub use model::{SearchResponse, SearchResult};
pub use runtime::SearchRuntime;
pub use worker::FetchCompletion;

/// Sequence number attached to every started search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// The visible state of the current search.
///
/// While `loading` is set, `results` and `combined_summary` still belong to the
/// previous completed search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    query: String,
    results: Vec<SearchResult>,
    combined_summary: String,
    loading: bool,
}

impl SessionState {
    /// Query of the most recently started search.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    #[must_use]
    pub fn combined_summary(&self) -> &str {
        &self.combined_summary
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The first result, used as the primary source.
    #[must_use]
    pub fn top_result(&self) -> Option<&SearchResult> {
        self.results.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
}

/// What the caller must send to the backend after [`SearchSession::start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: RequestId,
    pub query: String,
}

impl SearchTicket {
    #[must_use]
    pub fn into_request(self, country: Country, ui_lang: UiLanguage) -> SearchRequest {
        SearchRequest {
            id: self.id,
            query: self.query,
            country,
            ui_lang,
        }
    }
}

/// How a completion was handled.
#[derive(Debug)]
pub enum Completion {
    /// The latest search finished; results, summary and history were updated.
    Succeeded { result_count: usize },
    /// The latest search failed; previous results remain.
    Failed(SearchError),
    /// The completion belonged to an older request and was dropped.
    Superseded,
}

#[derive(Debug)]
struct Pending {
    id: RequestId,
    query: String,
}

/// State machine for the live search.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SessionState,
    last_issued: u64,
    pending: Option<Pending>,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.pending.is_some() {
            SessionPhase::Loading
        } else {
            SessionPhase::Idle
        }
    }

    /// Id of the search still awaiting its completion.
    #[must_use]
    pub fn pending_id(&self) -> Option<RequestId> {
        self.pending.as_ref().map(|pending| pending.id)
    }

    /// Whether `id` is the most recently started request.
    #[must_use]
    pub fn is_latest(&self, id: RequestId) -> bool {
        self.pending.as_ref().is_some_and(|pending| pending.id == id)
    }

    /// Begin a search for `query`.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the session enters
    /// `Loading`, keeps showing the previous results, and returns the ticket to
    /// dispatch. Starting while another search is in flight is allowed; the
    /// older one will be discarded when it completes.
    pub fn start(&mut self, query: &str) -> Option<SearchTicket> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.last_issued += 1;
        let id = RequestId(self.last_issued);
        if let Some(previous) = self.pending.replace(Pending {
            id,
            query: query.to_string(),
        }) {
            debug!(superseded = previous.id.0, id = id.0, "search superseded while in flight");
        }
        self.state.query = query.to_string();
        self.state.loading = true;

        Some(SearchTicket {
            id,
            query: query.to_string(),
        })
    }

    /// Apply the outcome of request `id`.
    ///
    /// On success results and summary are replaced together, loading clears
    /// and the query is recorded in `history` with the top result's title. On
    /// failure only the loading flag changes. Completions for any request
    /// other than the latest are discarded.
    pub fn complete(
        &mut self,
        id: RequestId,
        result: Result<SearchResponse, SearchError>,
        history: &mut HistoryStore,
    ) -> Completion {
        if !self.is_latest(id) {
            debug!(id = id.0, "discarding stale search completion");
            return Completion::Superseded;
        }
        let Some(pending) = self.pending.take() else {
            return Completion::Superseded;
        };
        self.state.loading = false;

        match result {
            Ok(response) => {
                let SearchResponse {
                    results,
                    combined_summary,
                } = response;
                self.state.results = results;
                self.state.combined_summary = combined_summary;

                let top_title = self
                    .state
                    .top_result()
                    .map(|result| result.title.as_str())
                    .unwrap_or_default();
                history.record(&pending.query, top_title);

                let result_count = self.state.results.len();
                info!(query = %pending.query, result_count, "search completed");
                Completion::Succeeded { result_count }
            }
            Err(err) => {
                warn!(query = %pending.query, error = %err, "search failed");
                Completion::Failed(err)
            }
        }
    }
}
