//! Shared error types for the playlist transfer system

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid playlist identifier: {input:?}")]
    InvalidPlaylistId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Failure of a single call to a remote catalog service
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogFailure {
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("access forbidden")]
    Forbidden,

    #[error("resource not found")]
    NotFound,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("server error: {0}")]
    ServerError(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl CatalogFailure {
    /// Map a non-success HTTP status code to a failure
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => CatalogFailure::AuthenticationFailed,
            403 => CatalogFailure::Forbidden,
            404 => CatalogFailure::NotFound,
            429 => CatalogFailure::RateLimitExceeded,
            503 => CatalogFailure::ServiceUnavailable,
            _ if body.is_empty() => CatalogFailure::ServerError(format!("HTTP {status}")),
            _ => CatalogFailure::ServerError(format!("HTTP {status}: {body}")),
        }
    }
}
