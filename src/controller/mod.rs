//! Glue between user intents and the state layer.
//!
//! [`SessionController`] owns the live [`SearchSession`], the [`HistoryStore`],
//! the background [`SearchRuntime`] and the disclosure state of everything on
//! screen. Front-ends (the TUI, batch mode, tests) drive it with plain method
//! calls and read back what to display.


use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::disclosure::{
    BlockView, Disclosure, SNIPPET_LIMIT, SNIPPET_PREVIEW_CHARS, SUMMARY_LIMIT, SnippetDisclosure,
    SnippetView,
};
use crate::export::{DocumentExporter, ExportError, PrintableRegion};
use crate::history::{HistoryEntry, HistoryStore};
use crate::session::{
    Completion, Country, RequestId, SearchError, SearchResponse, SearchRuntime, SearchSession,
    SessionState, UiLanguage,
};

/// Character limits used by the disclosure widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub summary_limit: NonZeroUsize,
    pub snippet_preview_chars: NonZeroUsize,
    pub snippet_limit: NonZeroUsize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            summary_limit: SUMMARY_LIMIT,
            snippet_preview_chars: SNIPPET_PREVIEW_CHARS,
            snippet_limit: SNIPPET_LIMIT,
        }
    }
}

/// Short notice shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

pub struct SessionController {
    session: SearchSession,
    history: HistoryStore,
    runtime: SearchRuntime,
    exporter: Box<dyn DocumentExporter>,
    country: Country,
    ui_lang: UiLanguage,
    limits: DisplayLimits,
    summary: Disclosure,
    snippets: Vec<SnippetDisclosure>,
    status: Option<StatusMessage>,
}

impl SessionController {
    pub fn new(
        runtime: SearchRuntime,
        history: HistoryStore,
        exporter: Box<dyn DocumentExporter>,
    ) -> Self {
        Self {
            session: SearchSession::new(),
            history,
            runtime,
            exporter,
            country: Country::default(),
            ui_lang: UiLanguage::default(),
            limits: DisplayLimits::default(),
            summary: Disclosure::new(),
            snippets: Vec::new(),
            status: None,
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: DisplayLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, country: Country, ui_lang: UiLanguage) -> Self {
        self.country = country;
        self.ui_lang = ui_lang;
        self
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    #[must_use]
    pub fn limits(&self) -> DisplayLimits {
        self.limits
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn country(&self) -> Country {
        self.country
    }

    #[must_use]
    pub fn ui_lang(&self) -> UiLanguage {
        self.ui_lang
    }

    pub fn set_country(&mut self, country: Country) {
        self.country = country;
    }

    pub fn set_ui_lang(&mut self, ui_lang: UiLanguage) {
        self.ui_lang = ui_lang;
    }

    pub fn cycle_country(&mut self) -> Country {
        self.country = self.country.next();
        self.country
    }

    pub fn cycle_ui_lang(&mut self) -> UiLanguage {
        self.ui_lang = self.ui_lang.next();
        self.ui_lang
    }

    /// Start a search for `query` with the current selectors.
    ///
    /// Blank input is ignored. Returns the id of the dispatched request.
    pub fn submit(&mut self, query: &str) -> Option<RequestId> {
        let ticket = self.session.start(query)?;
        let id = ticket.id;
        self.status = None;

        let request = ticket.into_request(self.country, self.ui_lang);
        if let Err(err) = self.runtime.dispatch(request) {
            self.apply(id, Err(err));
        }
        Some(id)
    }

    /// Re-run the history entry at `index`: move it to the front, then search.
    ///
    /// The entry is promoted immediately, whatever the outcome of the search.
    pub fn rerun(&mut self, index: usize) -> Option<RequestId> {
        let entry = self.history.get(index)?.clone();
        self.history.touch(&entry);
        self.submit(&entry.query)
    }

    /// Apply every completion that has arrived. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.runtime.try_recv() {
                Ok(completion) => {
                    self.apply(completion.id, completion.result);
                    handled += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.fail_pending();
                    break;
                }
            }
        }
        handled
    }

    /// Block until the latest search completes or `timeout` elapses.
    ///
    /// Returns whether the session is idle afterwards.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state().is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.runtime.recv_timeout(remaining) {
                Ok(completion) => {
                    self.apply(completion.id, completion.result);
                }
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    self.fail_pending();
                    break;
                }
            }
        }
        !self.state().is_loading()
    }

    fn fail_pending(&mut self) {
        if let Some(id) = self.session.pending_id() {
            self.apply(id, Err(SearchError::Disconnected));
        }
    }

    fn apply(&mut self, id: RequestId, result: Result<SearchResponse, SearchError>) {
        match self.session.complete(id, result, &mut self.history) {
            Completion::Succeeded { result_count } => {
                self.summary.reset();
                self.snippets = vec![SnippetDisclosure::new(); result_count];
                if result_count == 0 {
                    self.status = Some(StatusMessage::Info("No results found".to_string()));
                }
            }
            Completion::Failed(err) => {
                self.status = Some(StatusMessage::Error(format!("Search failed: {err}")));
            }
            Completion::Superseded => {}
        }
    }

    /// The combined summary as currently displayed.
    #[must_use]
    pub fn summary_view(&self) -> Option<BlockView<'_>> {
        self.summary
            .block(self.state().combined_summary(), self.limits.summary_limit)
    }

    pub fn toggle_summary(&mut self) -> bool {
        let text = self.session.state().combined_summary();
        self.summary.toggle(text, self.limits.summary_limit)
    }

    /// The description of result `index` as currently displayed.
    #[must_use]
    pub fn snippet_view(&self, index: usize) -> Option<SnippetView<'_>> {
        let result = self.state().results().get(index)?;
        let disclosure = self.snippets.get(index).copied().unwrap_or_default();
        disclosure.render(
            &result.description,
            self.limits.snippet_preview_chars,
            self.limits.snippet_limit,
        )
    }

    /// Switch result `index` between its preview and its expanded block.
    pub fn toggle_snippet(&mut self, index: usize) -> bool {
        let Some(result) = self.session.state().results().get(index) else {
            return false;
        };
        match self.snippets.get_mut(index) {
            Some(disclosure) => {
                disclosure.toggle(&result.description, self.limits.snippet_preview_chars)
            }
            None => false,
        }
    }

    /// "Read more" / "Show less" inside an expanded snippet.
    pub fn toggle_snippet_detail(&mut self, index: usize) -> bool {
        let Some(result) = self.session.state().results().get(index) else {
            return false;
        };
        match self.snippets.get_mut(index) {
            Some(disclosure) => disclosure.toggle_detail(&result.description, self.limits.snippet_limit),
            None => false,
        }
    }

    /// The summary as displayed plus the primary source link.
    #[must_use]
    pub fn printable_region(&self) -> Option<PrintableRegion> {
        let view = self.summary_view()?;
        let source = self.state().top_result().map(|result| result.url.clone());
        let region = PrintableRegion::summary(view.text.into_owned(), source);
        (!region.is_empty()).then_some(region)
    }

    /// Export the printable region and report the outcome in the status line.
    pub fn export(&mut self) -> Result<PathBuf, ExportError> {
        let outcome = match self.printable_region() {
            Some(region) => self.exporter.export(&region),
            None => Err(ExportError::NothingToExport),
        };
        match &outcome {
            Ok(path) => {
                info!(path = %path.display(), "summary exported");
                self.status = Some(StatusMessage::Info(format!("Exported to {}", path.display())));
            }
            Err(err) => {
                warn!(error = %err, "export failed");
                self.status = Some(StatusMessage::Error(err.to_string()));
            }
        }
        outcome
    }
}
