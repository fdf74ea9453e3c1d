//! The remote search/summarization service.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

use super::{Country, RequestId, SearchResponse, UiLanguage};

/// Everything that can make a search fail.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("search service responded with {status}")]
    Status { status: StatusCode },
    #[error("search response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to start search thread: {0}")]
    Worker(#[from] std::io::Error),
    #[error("search worker is no longer running")]
    Disconnected,
}

/// A fully specified request, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: RequestId,
    pub query: String,
    pub country: Country,
    pub ui_lang: UiLanguage,
}

/// Anything able to answer a search request. Called from background threads.
pub trait SearchBackend: Send + Sync {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

/// [`SearchBackend`] talking to `GET {endpoint}/search_summary`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// Build a backend for `endpoint`. `timeout` of `None` waits indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("scour/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SearchError::Client)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/search_summary", self.endpoint.trim_end_matches('/'))
    }
}

impl SearchBackend for HttpBackend {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let url = self.search_url();
        debug!(id = request.id.get(), query = %request.query, "sending search request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", request.query.as_str()),
                ("country", request.country.code()),
                ("ui_lang", request.ui_lang.code()),
            ])
            .send()
            .map_err(|source| SearchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status { status });
        }

        let body = response
            .text()
            .map_err(|source| SearchError::Transport { url, source })?;
        Ok(serde_json::from_str(&body)?)
    }
}
