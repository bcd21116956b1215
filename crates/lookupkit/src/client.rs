//! Lookup client
//!
//! This module provides the main entry point for resolving a
//! [`LookupRequest`] into a [`LookupOutcome`]. Per-resource extraction
//! logic lives in the `resources` module.

use crate::endpoints::EndpointMap;
use crate::resources;
use crate::transport::{HttpTransport, Transport};
use crate::types::{HttpMethod, LookupOutcome, LookupRequest, ResourceKind};
use serde_json::json;
use std::sync::Arc;

/// Builder for configuring a [`LookupClient`]
#[derive(Default)]
pub struct ClientBuilder {
    endpoints: EndpointMap,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Create a builder with default endpoints and transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the URL template for a resource kind
    ///
    /// Templates use an `{identifier}` placeholder, e.g.
    /// `https://api.github.com/users/{identifier}`.
    pub fn endpoint(mut self, kind: ResourceKind, template: impl Into<String>) -> Self {
        self.endpoints.set(kind, template);
        self
    }

    /// Set a custom User-Agent (only applies to the default transport)
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Inject a custom transport implementation
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> LookupClient {
        let transport = self.transport.unwrap_or_else(|| {
            let http = match self.user_agent {
                Some(ua) => HttpTransport::with_user_agent(ua),
                None => HttpTransport::new(),
            };
            Arc::new(http)
        });

        LookupClient {
            endpoints: self.endpoints,
            transport,
        }
    }
}

/// Client for remote resource lookups
///
/// Holds no per-call state; a single instance is reusable for
/// sequential, unrelated requests. Every call performs exactly one
/// transport request (no retry) and resolves to exactly one outcome
/// variant, never a panic or an error across the boundary.
pub struct LookupClient {
    endpoints: EndpointMap,
    transport: Arc<dyn Transport>,
}

impl Default for LookupClient {
    fn default() -> Self {
        ClientBuilder::new().build()
    }
}

impl LookupClient {
    /// Create a client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with default endpoints and transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a resource and classify the result
    ///
    /// Status interpretation:
    /// - 2xx: parse the body and extract the resource's field set
    /// - 404: [`LookupOutcome::NotFound`]
    /// - any other status: [`LookupOutcome::TransportError`]
    /// - network failure: [`LookupOutcome::TransportError`]
    /// - unparseable 2xx body: [`LookupOutcome::UnexpectedError`]
    ///
    /// A blank identifier fails before any transport call is made.
    pub async fn lookup(&self, request: &LookupRequest) -> LookupOutcome {
        let identifier = request.identifier.trim();
        if identifier.is_empty() {
            return LookupOutcome::UnexpectedError {
                message: "identifier must not be empty".to_string(),
            };
        }

        let url = match self.endpoints.resolve(request.kind, identifier) {
            Ok(url) => url,
            Err(e) => {
                return LookupOutcome::UnexpectedError {
                    message: format!("invalid endpoint for {}: {}", request.kind, e),
                }
            }
        };

        let method = request.kind.method();
        let body = match method {
            HttpMethod::Post => Some(
                request
                    .payload
                    .clone()
                    .unwrap_or_else(|| json!({ "name": identifier })),
            ),
            HttpMethod::Get => None,
        };

        tracing::debug!(kind = %request.kind, url = %url, %method, "dispatching lookup");

        let reply = match self.transport.send(method, url.as_str(), body.as_ref()).await {
            Ok(reply) => reply,
            Err(failure) => {
                return LookupOutcome::TransportError {
                    message: failure.to_string(),
                }
            }
        };

        match reply.status {
            404 => LookupOutcome::NotFound {
                identifier: identifier.to_string(),
            },
            status if (200..300).contains(&status) => {
                match resources::build_report(request.kind, &reply.body) {
                    Ok(report) => LookupOutcome::Success { report },
                    Err(e) => LookupOutcome::UnexpectedError {
                        message: e.to_string(),
                    },
                }
            }
            status => {
                let reason = reply.reason.as_deref().unwrap_or("unknown status");
                LookupOutcome::TransportError {
                    message: format!("HTTP {} {}", status, reason),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportFailure;
    use crate::transport::TransportReply;
    use crate::{NO_NAME_DEFAULT, UNKNOWN_DEFAULT};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub transport answering every request with a canned reply
    struct StubTransport {
        reply: Result<TransportReply, TransportFailure>,
        calls: AtomicUsize,
    }

    impl StubTransport {
        fn replying(status: u16, reason: Option<&str>, body: &str) -> Self {
            Self {
                reply: Ok(TransportReply {
                    status,
                    reason: reason.map(|s| s.to_string()),
                    body: body.as_bytes().to_vec(),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(failure: TransportFailure) -> Self {
            Self {
                reply: Err(failure),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(
            &self,
            _method: HttpMethod,
            _url: &str,
            _body: Option<&serde_json::Value>,
        ) -> Result<TransportReply, TransportFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(TransportFailure::Timeout(m)) => Err(TransportFailure::Timeout(m.clone())),
                Err(TransportFailure::Connect(m)) => Err(TransportFailure::Connect(m.clone())),
                Err(TransportFailure::Request(m)) => Err(TransportFailure::Request(m.clone())),
            }
        }
    }

    fn client_with(transport: Arc<StubTransport>) -> LookupClient {
        LookupClient::builder().transport(transport).build()
    }

    const OCTOCAT_BODY: &str = r#"{
        "login": "octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231",
        "public_repos": 8,
        "followers": 4000
    }"#;

    #[tokio::test]
    async fn test_success_with_defaults_for_missing_optionals() {
        let transport = Arc::new(StubTransport::replying(200, Some("OK"), OCTOCAT_BODY));
        let client = client_with(transport.clone());

        let request = LookupRequest::new("octocat", ResourceKind::GithubUser);
        let outcome = client.lookup(&request).await;

        let report = outcome.report().expect("expected success");
        assert_eq!(report.get("login"), Some("octocat"));
        assert_eq!(report.get("name"), Some(NO_NAME_DEFAULT));
        assert_eq!(report.get("location"), Some(UNKNOWN_DEFAULT));
        assert_eq!(
            report.get("avatar"),
            Some("https://avatars.githubusercontent.com/u/583231")
        );
        assert_eq!(report.get("public_repos"), Some("8"));
        assert_eq!(report.get("followers"), Some("4000"));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_404_maps_to_not_found() {
        let transport = Arc::new(StubTransport::replying(404, Some("Not Found"), "{}"));
        let client = client_with(transport);

        let request = LookupRequest::new("nobody", ResourceKind::GithubUser);
        let outcome = client.lookup(&request).await;

        assert_eq!(
            outcome,
            LookupOutcome::NotFound {
                identifier: "nobody".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_identifier_is_trimmed_in_not_found() {
        let transport = Arc::new(StubTransport::replying(404, None, "{}"));
        let client = client_with(transport);

        let request = LookupRequest::new("  nobody  ", ResourceKind::GithubUser);
        let outcome = client.lookup(&request).await;

        assert_eq!(
            outcome,
            LookupOutcome::NotFound {
                identifier: "nobody".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_transport_error() {
        let transport = Arc::new(StubTransport::replying(
            500,
            Some("Internal Server Error"),
            "",
        ));
        let client = client_with(transport);

        let request = LookupRequest::new("octocat", ResourceKind::GithubUser);
        let outcome = client.lookup(&request).await;

        assert_eq!(
            outcome,
            LookupOutcome::TransportError {
                message: "HTTP 500 Internal Server Error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_transport_error() {
        let transport = Arc::new(StubTransport::failing(TransportFailure::Connect(
            "connection refused".to_string(),
        )));
        let client = client_with(transport);

        let request = LookupRequest::new("octocat", ResourceKind::GithubUser);
        let outcome = client.lookup(&request).await;

        assert!(matches!(outcome, LookupOutcome::TransportError { .. }));
    }

    #[tokio::test]
    async fn test_unparseable_200_body_maps_to_unexpected_error() {
        let transport = Arc::new(StubTransport::replying(200, Some("OK"), "<html>nope</html>"));
        let client = client_with(transport);

        let request = LookupRequest::new("octocat", ResourceKind::GithubUser);
        let outcome = client.lookup(&request).await;

        assert!(matches!(outcome, LookupOutcome::UnexpectedError { .. }));
    }

    #[tokio::test]
    async fn test_blank_identifier_skips_transport() {
        let transport = Arc::new(StubTransport::replying(200, Some("OK"), OCTOCAT_BODY));
        let client = client_with(transport.clone());

        for identifier in ["", "   ", "\t\n"] {
            let request = LookupRequest::new(identifier, ResourceKind::GithubUser);
            let outcome = client.lookup(&request).await;
            assert!(matches!(outcome, LookupOutcome::UnexpectedError { .. }));
        }

        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_is_idempotent_against_deterministic_stub() {
        let transport = Arc::new(StubTransport::replying(200, Some("OK"), OCTOCAT_BODY));
        let client = client_with(transport.clone());

        let request = LookupRequest::new("octocat", ResourceKind::GithubUser);
        let first = client.lookup(&request).await;
        let second = client.lookup(&request).await;

        assert_eq!(first, second);
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_contact_form_posts_default_payload() {
        /// Captures the method and body the client hands to the transport
        struct CapturingTransport {
            seen: std::sync::Mutex<Vec<(HttpMethod, Option<serde_json::Value>)>>,
        }

        #[async_trait]
        impl Transport for CapturingTransport {
            async fn send(
                &self,
                method: HttpMethod,
                _url: &str,
                body: Option<&serde_json::Value>,
            ) -> Result<TransportReply, TransportFailure> {
                self.seen.lock().unwrap().push((method, body.cloned()));
                Ok(TransportReply {
                    status: 200,
                    reason: Some("OK".to_string()),
                    body: br#"{"json": {"name": "ada"}}"#.to_vec(),
                })
            }
        }

        let transport = Arc::new(CapturingTransport {
            seen: std::sync::Mutex::new(Vec::new()),
        });
        let client = LookupClient::builder().transport(transport.clone()).build();

        let request = LookupRequest::new("ada", ResourceKind::ContactForm);
        let outcome = client.lookup(&request).await;
        assert!(outcome.is_success());

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, HttpMethod::Post);
        assert_eq!(seen[0].1, Some(serde_json::json!({"name": "ada"})));
    }

    #[tokio::test]
    async fn test_contact_form_posts_explicit_payload() {
        let transport = Arc::new(StubTransport::replying(
            200,
            Some("OK"),
            r#"{"json": {"email": "ada@example.com", "message": "hi", "name": "Ada"}}"#,
        ));
        let client = client_with(transport);

        let request = LookupRequest::new("Ada", ResourceKind::ContactForm).payload(
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "hi"}),
        );
        let outcome = client.lookup(&request).await;

        let report = outcome.report().expect("expected success");
        assert_eq!(report.get("email"), Some("ada@example.com"));
        assert_eq!(report.get("message"), Some("hi"));
    }

    #[tokio::test]
    async fn test_client_is_reusable_across_kinds() {
        let transport = Arc::new(StubTransport::replying(404, Some("Not Found"), ""));
        let client = client_with(transport.clone());

        for kind in [ResourceKind::GithubUser, ResourceKind::CountryInfo] {
            let outcome = client.lookup(&LookupRequest::new("x", kind)).await;
            assert!(matches!(outcome, LookupOutcome::NotFound { .. }));
        }
        assert_eq!(transport.call_count(), 2);
    }
}
