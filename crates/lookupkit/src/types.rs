//! Core types for Lookupkit

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// HTTP method for the request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET request
    #[default]
    Get,
    /// HTTP POST request with a JSON body
    Post,
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err("Invalid method: must be GET or POST".to_string()),
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A named category of remote entity that can be looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// GitHub user profile (`/users/{username}`)
    GithubUser,
    /// Country record by common name
    CountryInfo,
    /// Contact form submission (POST, server echoes the payload)
    ContactForm,
}

impl ResourceKind {
    /// Short identifier used in logging and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::GithubUser => "github_user",
            ResourceKind::CountryInfo => "country_info",
            ResourceKind::ContactForm => "contact_form",
        }
    }

    /// HTTP method this resource is fetched with
    pub fn method(&self) -> HttpMethod {
        match self {
            ResourceKind::ContactForm => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Request to look up a remote resource
///
/// Immutable once constructed; created per invocation and consumed by
/// [`LookupClient::lookup`](crate::LookupClient::lookup).
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    /// Identifier to substitute into the resource's URL template
    pub identifier: String,
    /// Which resource category to look up
    pub kind: ResourceKind,
    /// JSON body for POST resources (ignored for GET resources)
    pub payload: Option<serde_json::Value>,
}

impl LookupRequest {
    /// Create a new request for the given identifier and resource kind
    pub fn new(identifier: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            payload: None,
        }
    }

    /// Attach a JSON payload (used by POST resources such as the
    /// contact form; when absent, a minimal `{"name": identifier}`
    /// document is sent)
    pub fn payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Ordered mapping from field name to presentation-ready string
///
/// Field order is insertion order, so reports render the same way the
/// resource defines them. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    fields: Vec<(String, String)>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the report has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Terminal outcome of a lookup
///
/// Exactly one variant per call; the client resolves every condition to
/// one of these locally and never panics or propagates an error across
/// its boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// Resource found and parsed; report fields are presentation-ready
    Success {
        /// Extracted fields in resource-defined order
        report: Report,
    },
    /// Server answered HTTP 404 for this identifier
    NotFound {
        /// The identifier that was looked up (trimmed)
        identifier: String,
    },
    /// Network-level failure or a non-2xx, non-404 status
    TransportError {
        /// Human-readable reason
        message: String,
    },
    /// Invalid input, unparseable response body, or any other
    /// unclassified condition
    UnexpectedError {
        /// Human-readable reason
        message: String,
    },
}

impl LookupOutcome {
    /// True for the `Success` variant
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success { .. })
    }

    /// The report, if this outcome is a success
    pub fn report(&self) -> Option<&Report> {
        match self {
            LookupOutcome::Success { report } => Some(report),
            _ => None,
        }
    }
}
