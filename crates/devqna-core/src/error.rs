//! Error types for devqna-core

use thiserror::Error;

/// Result type alias using devqna-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in devqna-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failure talking to the BaaS
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Error response from the BaaS, with the upstream HTTP status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Remote call exceeded the bounded-timeout ceiling
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session persistence (OS keyring) error
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

impl Error {
    /// Upstream HTTP status carried by this error, when there is one.
    #[must_use]
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is an "already exists" conflict (HTTP 409).
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Api { status: 409, .. })
    }
}
