use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::worker::{self, FetchCompletion, SearchCommand};
use super::{SearchBackend, SearchError, SearchRequest};

/// UI-side handle on the background search worker.
pub struct SearchRuntime {
    tx: Sender<SearchCommand>,
    rx: Receiver<FetchCompletion>,
    latest_request_id: Arc<AtomicU64>,
}

impl SearchRuntime {
    /// Start a worker that answers requests with `backend`.
    pub fn spawn(backend: Arc<dyn SearchBackend>) -> io::Result<Self> {
        let (tx, rx, latest_request_id) = worker::spawn(backend)?;
        Ok(Self {
            tx,
            rx,
            latest_request_id,
        })
    }

    /// Hand a request to the worker and mark it as the latest one.
    pub fn dispatch(&self, request: SearchRequest) -> Result<(), SearchError> {
        self.latest_request_id
            .store(request.id.get(), Ordering::Release);
        self.tx
            .send(SearchCommand::Fetch(request))
            .map_err(|_| SearchError::Disconnected)
    }

    pub fn try_recv(&self) -> Result<FetchCompletion, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<FetchCompletion, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(SearchCommand::Shutdown);
    }
}

impl Drop for SearchRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}
