//! Lookupkit - remote resource lookup and reporting library
//!
//! This crate provides a reusable client for the
//! fetch → validate → present-or-report-error workflow: given an
//! identifier and a resource kind, it performs one network request,
//! interprets the HTTP status, and resolves to exactly one
//! [`LookupOutcome`] variant ready for display or serialization.
//!
//! ## Resource system
//!
//! Each [`ResourceKind`] maps to a URL template (configurable via
//! [`LookupClient::builder`]) and a fixed set of report fields extracted
//! from the response body. Built-in resources:
//! - [`ResourceKind::GithubUser`] - GitHub user profile lookup
//! - [`ResourceKind::CountryInfo`] - country record lookup
//! - [`ResourceKind::ContactForm`] - JSON form submission with echo report
//!
//! The HTTP transport is injected behind the [`Transport`] trait, so the
//! client contract can be tested without touching the network.

pub mod client;
mod endpoints;
mod error;
mod resources;
mod transport;
mod types;

pub use client::{ClientBuilder, LookupClient};
pub use endpoints::EndpointMap;
pub use error::{ReportError, TransportFailure};
pub use transport::{HttpTransport, Transport, TransportReply};
pub use types::{HttpMethod, LookupOutcome, LookupRequest, Report, ResourceKind};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Lookupkit/0.1";

/// Default value reported when a profile has no display name
pub const NO_NAME_DEFAULT: &str = "No name provided";

/// Default value reported for absent optional fields
pub const UNKNOWN_DEFAULT: &str = "Unknown";
