//! Client error types.

use thiserror::Error;

use crate::atom::Relation;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server rejected the credentials (HTTP 401).
    #[error("EventStoreDB: unauthorized")]
    Unauthorized,

    /// Server returned any other non-success status.
    #[error("HTTP error from EventStoreDB: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Status line, e.g. `500 Internal Server Error`.
        message: String,
    },

    /// Event was written but the response carried no `Location` header.
    #[error("event created but no location header found")]
    MissingLocation,

    /// The trailing segment of a location or link is not an event number.
    #[error("invalid event number {value:?}: {source}")]
    InvalidEventNumber {
        /// The segment that failed to parse.
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Stream name that cannot be addressed as a single path segment.
    #[error("invalid stream name: {0:?}")]
    InvalidStreamName(String),

    /// No link with the requested relation.
    #[error("link not found: {0}")]
    LinkNotFound(Relation),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is an authentication error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::LinkNotFound(_)) || matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
