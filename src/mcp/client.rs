use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::protocol::{BackendHealth, QueryRequest, QueryResponse};
use super::{ConversationContext, QueryError};
use crate::constants::{ERROR_BODY_EXCERPT_LEN, HEALTH_PATH, QUERY_PATH};
use crate::utils::truncate_str;

/// Async client for the TransportAI MCP backend.
///
/// Stateless apart from the connection pool: the conversation context is
/// owned by the caller and passed into every search. Cloning is cheap and
/// shares the pool.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: Client,
    base_url: String,
}

/// Completion of one spawned search, delivered to the main loop.
#[derive(Debug)]
pub enum SearchEvent {
    /// The backend answered with a well-formed response.
    Completed(Box<QueryResponse>),
    /// Any failure; carries the rendered error for the status bar.
    Failed(String),
}

/// Completion of one spawned health probe.
#[derive(Debug)]
pub enum HealthEvent {
    Online(BackendHealth),
    Offline(String),
}

impl QueryClient {
    /// Create a client for `base_url` (scheme + host + optional port/prefix).
    pub fn new(base_url: &str) -> Result<Self, QueryError> {
        let parsed = Url::parse(base_url).map_err(|e| QueryError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(QueryError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the query endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, QUERY_PATH)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one flight query carrying `context`, and parse the reply.
    ///
    /// No retries. The caller decides what to do with the returned context.
    pub async fn search(
        &self,
        flight_number: &str,
        context: &ConversationContext,
    ) -> Result<QueryResponse, QueryError> {
        let body = QueryRequest::for_flight(flight_number, context);
        debug!("POST {} flight_iata={:?}", self.endpoint(), flight_number);

        let response = self
            .http
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(QueryError::Network)?;

        read_json(response).await
    }

    /// Probe `GET /health`.
    pub async fn health(&self) -> Result<BackendHealth, QueryError> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(QueryError::Network)?;

        read_json(response).await
    }

    /// Run a search and package the outcome as a `SearchEvent`.
    pub async fn search_event(
        &self,
        flight_number: &str,
        context: &ConversationContext,
    ) -> SearchEvent {
        match self.search(flight_number, context).await {
            Ok(resp) => SearchEvent::Completed(Box::new(resp)),
            Err(e) => SearchEvent::Failed(e.to_string()),
        }
    }

    /// Run a health probe and package the outcome as a `HealthEvent`.
    pub async fn health_event(&self) -> HealthEvent {
        match self.health().await {
            Ok(h) => HealthEvent::Online(h),
            Err(e) => HealthEvent::Offline(e.to_string()),
        }
    }
}

/// Check the status, then decode the body. Non-2xx bodies are kept as a
/// short excerpt for the log.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, QueryError> {
    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        return Err(QueryError::Server {
            status: status.as_u16(),
            body: truncate_str(&body_text, ERROR_BODY_EXCERPT_LEN),
        });
    }

    let bytes = response.bytes().await.map_err(QueryError::Network)?;
    serde_json::from_slice(&bytes).map_err(QueryError::MalformedResponse)
}
