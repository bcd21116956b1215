//! Error types for Lookupkit
//!
//! These errors live behind the client boundary: `lookup` itself never
//! returns them, it classifies them into [`LookupOutcome`](crate::LookupOutcome)
//! variants.

use thiserror::Error;

/// Failures raised by a [`Transport`](crate::Transport) implementation
#[derive(Debug, Error)]
pub enum TransportFailure {
    /// Server did not respond within the transport's timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Could not reach the server (DNS, connection refused, TLS)
    #[error("failed to connect to server: {0}")]
    Connect(String),

    /// Any other request-level failure
    #[error("request failed: {0}")]
    Request(String),
}

impl TransportFailure {
    /// Classify a reqwest error into a transport failure
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportFailure::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportFailure::Connect(err.to_string())
        } else {
            TransportFailure::Request(err.to_string())
        }
    }
}

/// Failures while turning a 2xx response body into a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Body was not valid JSON or did not match the resource's shape
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Body parsed but held no usable record (e.g. an empty result array)
    #[error("empty response: {0}")]
    Empty(String),
}
