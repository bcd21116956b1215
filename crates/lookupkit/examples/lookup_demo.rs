//! Example: Look up a few resources and display the outcomes
//!
//! Run with: cargo run -p lookupkit --example lookup_demo
//!
//! This example hits the real public endpoints, so results depend on
//! network availability and API rate limits.

use lookupkit::{LookupClient, LookupOutcome, LookupRequest, ResourceKind};

/// Demo case definition
struct DemoCase {
    identifier: &'static str,
    kind: ResourceKind,
    description: &'static str,
}

const DEMO_CASES: &[DemoCase] = &[
    DemoCase {
        identifier: "octocat",
        kind: ResourceKind::GithubUser,
        description: "GitHub user profile",
    },
    DemoCase {
        identifier: "japan",
        kind: ResourceKind::CountryInfo,
        description: "Country record",
    },
    DemoCase {
        identifier: "this-user-should-not-exist-48151623",
        kind: ResourceKind::GithubUser,
        description: "Missing GitHub user (expect not found)",
    },
];

#[tokio::main]
async fn main() {
    println!("Lookupkit demo");
    println!("==============\n");

    let client = LookupClient::new();

    for (i, case) in DEMO_CASES.iter().enumerate() {
        println!("{}. {} ({})", i + 1, case.description, case.kind);
        println!("   Identifier: {}", case.identifier);

        let request = LookupRequest::new(case.identifier, case.kind);
        match client.lookup(&request).await {
            LookupOutcome::Success { report } => {
                for (name, value) in report.iter() {
                    println!("   {}: {}", name, value);
                }
            }
            LookupOutcome::NotFound { identifier } => {
                println!("   Not found: {}", identifier);
            }
            LookupOutcome::TransportError { message } => {
                println!("   Transport error: {}", message);
            }
            LookupOutcome::UnexpectedError { message } => {
                println!("   Unexpected error: {}", message);
            }
        }
        println!();
    }
}
