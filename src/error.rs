// Error handling module
// Transport, authentication and decoding failures are `Error`;
// errors reported by the iiko API inside a response body are `DomainError`.

use std::fmt;

use thiserror::Error;

/// Failures that prevent a call from producing a usable response
#[derive(Error, Debug)]
pub enum Error {
    /// Network, connection or timeout failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Access token could not be obtained
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Request payload could not be serialized
    #[error("Failed to encode request for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Response body does not match the expected shape
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Token contains characters that are not allowed in a header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Operation exists in the API surface but is not supported yet
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Error description returned by the iiko API in a response body.
///
/// A domain error arrives with a successful transport outcome, so it is
/// carried as the inner `Err` of [`ApiResult`]. Precondition failures detected
/// before any network call have no `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub description: String,
    pub status: Option<u16>,
    pub correlation_id: Option<String>,
    /// Raw response text, kept only when the client runs with `return_raw`
    pub raw: Option<String>,
}

impl DomainError {
    /// Error produced locally, before anything is sent
    pub fn precondition(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: None,
            correlation_id: None,
            raw: None,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "iiko API error ({}): {}", status, self.description),
            None => write!(f, "iiko API error: {}", self.description),
        }
    }
}

impl std::error::Error for DomainError {}

/// Result type alias for transport-level outcomes
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of a domain call: the outer `Result` is the transport outcome,
/// the inner one tells whether the API accepted the request.
pub type ApiResult<T> = Result<std::result::Result<T, DomainError>>;
