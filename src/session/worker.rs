use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use super::{RequestId, SearchBackend, SearchError, SearchRequest, SearchResponse};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
    /// Fetch results for a request.
    Fetch(SearchRequest),
    /// Stop the worker thread. Fetches already running still report back.
    Shutdown,
}

/// A finished fetch, tagged with the request it answers.
#[derive(Debug)]
pub struct FetchCompletion {
    pub id: RequestId,
    pub result: Result<SearchResponse, SearchError>,
}

/// Launches the background search worker and returns its channels.
///
/// Each fetch runs on its own thread so a slow response never holds up a newer
/// request. A request that has already been superseded when the worker picks it
/// up is dropped without being sent.
pub(crate) fn spawn(
    backend: Arc<dyn SearchBackend>,
) -> io::Result<(Sender<SearchCommand>, Receiver<FetchCompletion>, Arc<AtomicU64>)> {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let latest_request_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_request_id);

    thread::Builder::new()
        .name("search-worker".into())
        .spawn(move || worker_loop(backend, command_rx, result_tx, thread_latest))?;

    Ok((command_tx, result_rx, latest_request_id))
}

fn worker_loop(
    backend: Arc<dyn SearchBackend>,
    command_rx: Receiver<SearchCommand>,
    result_tx: Sender<FetchCompletion>,
    latest_request_id: Arc<AtomicU64>,
) {
    while let Ok(command) = command_rx.recv() {
        match command {
            SearchCommand::Fetch(request) => {
                if request.id.get() < latest_request_id.load(Ordering::Acquire) {
                    debug!(id = request.id.get(), "skipping superseded search request");
                    continue;
                }
                start_fetch(&backend, &result_tx, request);
            }
            SearchCommand::Shutdown => break,
        }
    }
}

fn start_fetch(
    backend: &Arc<dyn SearchBackend>,
    result_tx: &Sender<FetchCompletion>,
    request: SearchRequest,
) {
    let id = request.id;
    let backend = Arc::clone(backend);
    let tx = result_tx.clone();
    let spawned = thread::Builder::new()
        .name("search-fetch".into())
        .spawn(move || {
            let result = backend.search(&request);
            let _ = tx.send(FetchCompletion { id, result });
        });

    if let Err(err) = spawned {
        let _ = result_tx.send(FetchCompletion {
            id,
            result: Err(SearchError::Worker(err)),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::session::{Country, SearchResult, UiLanguage};

    struct EchoBackend;

    impl SearchBackend for EchoBackend {
        fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
            Ok(SearchResponse {
                results: vec![SearchResult::new(&request.query, "http://echo", "")],
                combined_summary: String::new(),
            })
        }
    }

    fn request(id: u64, query: &str) -> SearchRequest {
        SearchRequest {
            id: RequestId::new(id),
            query: query.to_string(),
            country: Country::default(),
            ui_lang: UiLanguage::default(),
        }
    }

    #[test]
    fn shutdown_command_stops_worker() {
        let (tx, _rx, latest) = spawn(Arc::new(EchoBackend)).unwrap();
        assert_eq!(latest.load(Ordering::Relaxed), 0);
        tx.send(SearchCommand::Shutdown).unwrap();
    }

    #[test]
    fn fetch_results_are_forwarded_with_their_id() {
        let (tx, rx, latest) = spawn(Arc::new(EchoBackend)).unwrap();
        latest.store(7, Ordering::Release);
        tx.send(SearchCommand::Fetch(request(7, "echo"))).unwrap();

        let completion = rx.recv_timeout(Duration::from_secs(1)).expect("completion");
        assert_eq!(completion.id, RequestId::new(7));
        let response = completion.result.expect("response");
        assert_eq!(response.results[0].title, "echo");

        tx.send(SearchCommand::Shutdown).unwrap();
    }

    #[test]
    fn superseded_requests_are_not_fetched() {
        let (tx, rx, latest) = spawn(Arc::new(EchoBackend)).unwrap();
        latest.store(2, Ordering::Release);
        tx.send(SearchCommand::Fetch(request(1, "stale"))).unwrap();
        tx.send(SearchCommand::Fetch(request(2, "fresh"))).unwrap();

        let completion = rx.recv_timeout(Duration::from_secs(1)).expect("completion");
        assert_eq!(completion.id, RequestId::new(2));
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

        tx.send(SearchCommand::Shutdown).unwrap();
    }
}
