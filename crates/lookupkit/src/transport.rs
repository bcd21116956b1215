//! HTTP transport abstraction
//!
//! The client performs exactly one `send` per lookup through this trait.
//! [`HttpTransport`] is the reqwest-backed default; tests inject stubs.

use crate::error::TransportFailure;
use crate::types::HttpMethod;
use crate::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;

/// Connect timeout for outbound requests
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw reply from a transport: status plus body bytes
///
/// Status interpretation belongs to the client, not the transport; a
/// 404 or 500 is a reply, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase, when known
    pub reason: Option<String>,
    /// Response body bytes
    pub body: Vec<u8>,
}

/// External HTTP capability the client depends on but does not implement
///
/// Implementations must be stateless across calls (or internally
/// synchronized); the client may be reused for sequential requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one HTTP request
    ///
    /// `body` is serialized as JSON for POST requests and ignored
    /// otherwise. Returns a reply for any status the server produced;
    /// fails only on network-level problems.
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<TransportReply, TransportFailure>;
}

/// Default transport built on reqwest
///
/// Applies fixed connect/request timeouts and a configurable User-Agent.
/// Callers needing different timeout semantics supply their own
/// [`Transport`] implementation.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    user_agent: String,
}

impl HttpTransport {
    /// Create a transport with the default User-Agent
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Create a transport with a custom User-Agent
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<TransportReply, TransportFailure> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportFailure::Request(e.to_string()))?;

        let mut request = match method {
            HttpMethod::Get => client.get(url),
            HttpMethod::Post => client.post(url),
        };

        request = request
            .header(
                USER_AGENT,
                HeaderValue::from_str(&self.user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
            )
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if method == HttpMethod::Post {
            if let Some(json) = body {
                request = request.json(json);
            }
        }

        let response = request.send().await.map_err(TransportFailure::from_reqwest)?;

        let status = response.status();
        let reason = status.canonical_reason().map(|s| s.to_string());
        let bytes = response
            .bytes()
            .await
            .map_err(TransportFailure::from_reqwest)?;

        Ok(TransportReply {
            status: status.as_u16(),
            reason,
            body: bytes.to_vec(),
        })
    }
}
