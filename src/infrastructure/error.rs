//! Infrastructure-level errors (HTTP transport and REST API failures)

use thiserror::Error;

/// Errors raised while talking to a backend REST API.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{method} {url}: {source}")]
    Http {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx answer from the API, rendered the way the API reports it.
    #[error("{method} {url}: {status} (request {error_code:?}) {detail}")]
    Api {
        method: String,
        url: String,
        status: u16,
        error_code: String,
        detail: String,
    },

    #[error("decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("digest authentication: {0}")]
    Digest(String),
}

impl InfraError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            InfraError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
