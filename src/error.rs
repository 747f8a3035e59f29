//! Transport-level failures reported by the executor
//!
//! HTTP status codes are never errors; only failures that prevent a
//! response from being received end up here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be assembled (malformed URL, bad header)
    #[error("failed to create request: {0}")]
    Build(String),

    #[error("request failed: timed out after {0}s")]
    Timeout(u64),

    #[error("request failed: connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// Classify a reqwest failure raised while sending
    pub fn from_send(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_builder() {
            TransportError::Build(err.to_string())
        } else if err.is_timeout() {
            TransportError::Timeout(timeout_secs)
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}
