//! Error types for the wilayah region browser.

use thiserror::Error;

/// A failed directory fetch.
///
/// Network failures, non-2xx responses, and undecodable payloads are all
/// treated identically by callers: log and keep the prior state.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// The payload was not the expected JSON array.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
