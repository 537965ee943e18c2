//! Error types for folio.

use thiserror::Error;

/// Failure while reading an upstream endpoint.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("request failed: {0}")]
    Network(String),

    /// Upstream answered with a non-success status.
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// Response body exceeded the configured limit.
    #[error("response too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    /// Body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Common error type for folio.
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
