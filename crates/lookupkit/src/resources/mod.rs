//! Resource-specific report extraction
//!
//! Each resource kind has a fixed field set and its own response shape.
//! The client hands the 2xx response body to [`build_report`], which
//! dispatches to the matching extractor. Missing optional fields resolve
//! to documented defaults, never to an error.

mod contact_form;
mod country_info;
mod github_user;

use crate::error::ReportError;
use crate::types::{Report, ResourceKind};

/// Extract the report for a resource kind from a response body
pub(crate) fn build_report(kind: ResourceKind, body: &[u8]) -> Result<Report, ReportError> {
    match kind {
        ResourceKind::GithubUser => github_user::build_report(body),
        ResourceKind::CountryInfo => country_info::build_report(body),
        ResourceKind::ContactForm => contact_form::build_report(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_rejects_malformed_body() {
        for kind in [
            ResourceKind::GithubUser,
            ResourceKind::CountryInfo,
            ResourceKind::ContactForm,
        ] {
            let result = build_report(kind, b"<html>surprise</html>");
            assert!(matches!(result, Err(ReportError::Malformed(_))));
        }
    }
}
