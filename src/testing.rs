//! Fakes shared by unit tests.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::history::{HistoryStore, MemoryStorage};
use crate::session::{SearchBackend, SearchError, SearchRequest, SearchResponse, SearchResult};

pub(crate) type Reply = Result<SearchResponse, SearchError>;

pub(crate) fn memory_history() -> (HistoryStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    (HistoryStore::open(Box::new(storage.clone())), storage)
}

pub(crate) fn response(summary: &str, titles: &[&str]) -> SearchResponse {
    SearchResponse {
        results: titles
            .iter()
            .map(|title| {
                SearchResult::new(*title, format!("https://example.com/{title}"), format!("about {title}"))
            })
            .collect(),
        combined_summary: summary.to_string(),
    }
}

/// Backend that answers each query only once the test releases its gate.
pub(crate) struct GatedBackend {
    gates: Mutex<HashMap<String, Receiver<Reply>>>,
    started: Mutex<Sender<String>>,
}

impl GatedBackend {
    /// The receiver reports each query as its fetch begins.
    pub(crate) fn new() -> (Arc<Self>, Receiver<String>) {
        let (started_tx, started_rx) = mpsc::channel();
        let backend = Self {
            gates: Mutex::new(HashMap::new()),
            started: Mutex::new(started_tx),
        };
        (Arc::new(backend), started_rx)
    }

    /// Register `query`; its fetch blocks until the returned sender is used.
    pub(crate) fn gate(&self, query: &str) -> Sender<Reply> {
        let (tx, rx) = mpsc::channel();
        self.gates.lock().unwrap().insert(query.to_string(), rx);
        tx
    }
}

impl SearchBackend for GatedBackend {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let gate = self.gates.lock().unwrap().remove(&request.query);
        let _ = self.started.lock().unwrap().send(request.query.clone());
        match gate {
            Some(rx) => rx.recv().unwrap_or(Err(SearchError::Disconnected)),
            None => Err(SearchError::Disconnected),
        }
    }
}

/// Backend answering synchronously from a closure.
pub(crate) struct FnBackend<F>(pub(crate) F);

impl<F> SearchBackend for FnBackend<F>
where
    F: Fn(&SearchRequest) -> Reply + Send + Sync,
{
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        (self.0)(request)
    }
}
