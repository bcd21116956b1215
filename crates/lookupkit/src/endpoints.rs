//! Endpoint configuration
//!
//! URL templates are configuration, not logic: each resource kind maps
//! to a template with an optional `{identifier}` placeholder, supplied
//! at client construction and defaulting to the public endpoints.

use crate::types::ResourceKind;
use url::Url;

/// Placeholder substituted with the request identifier
const IDENTIFIER_PLACEHOLDER: &str = "{identifier}";

/// Default GitHub users endpoint
pub const GITHUB_USER_TEMPLATE: &str = "https://api.github.com/users/{identifier}";

/// Default REST Countries endpoint
pub const COUNTRY_INFO_TEMPLATE: &str = "https://restcountries.com/v3.1/name/{identifier}";

/// Default contact form target (echo server)
pub const CONTACT_FORM_TEMPLATE: &str = "https://httpbin.org/post";

/// Mapping from resource kind to URL template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMap {
    github_user: String,
    country_info: String,
    contact_form: String,
}

impl Default for EndpointMap {
    fn default() -> Self {
        Self {
            github_user: GITHUB_USER_TEMPLATE.to_string(),
            country_info: COUNTRY_INFO_TEMPLATE.to_string(),
            contact_form: CONTACT_FORM_TEMPLATE.to_string(),
        }
    }
}

impl EndpointMap {
    /// Create a map with the default public endpoints
    pub fn new() -> Self {
        Self::default()
    }

    /// Template configured for the given kind
    pub fn template(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::GithubUser => &self.github_user,
            ResourceKind::CountryInfo => &self.country_info,
            ResourceKind::ContactForm => &self.contact_form,
        }
    }

    /// Replace the template for a kind
    pub fn set(&mut self, kind: ResourceKind, template: impl Into<String>) {
        let template = template.into();
        match kind {
            ResourceKind::GithubUser => self.github_user = template,
            ResourceKind::CountryInfo => self.country_info = template,
            ResourceKind::ContactForm => self.contact_form = template,
        }
    }

    /// Build the target URL for a lookup
    ///
    /// Substitutes the identifier into the template's placeholder
    /// (templates without a placeholder, like the contact form target,
    /// are used as-is) and validates the result. The URL parser takes
    /// care of percent-encoding path characters such as spaces.
    pub fn resolve(&self, kind: ResourceKind, identifier: &str) -> Result<Url, url::ParseError> {
        let rendered = self
            .template(kind)
            .replace(IDENTIFIER_PLACEHOLDER, identifier);
        Url::parse(&rendered)
    }
}
