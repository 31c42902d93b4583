use thiserror::Error;

/// Everything that can go wrong talking to the MCP backend.
///
/// The screen collapses all search-time variants into a single
/// "unable to fetch" state; the variant only matters for logs.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Connection refused, DNS failure, or the body could not be read.
    #[error("could not reach backend: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The body was not JSON, or lacked a required field.
    #[error("malformed backend response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
