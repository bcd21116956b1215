//! GitHub user resource
//!
//! Extracts a fixed profile summary from the GitHub `/users/{username}`
//! API response.

use crate::error::ReportError;
use crate::types::Report;
use crate::{NO_NAME_DEFAULT, UNKNOWN_DEFAULT};
use serde::Deserialize;

/// GitHub API user response (partial)
#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
    name: Option<String>,
    location: Option<String>,
    avatar_url: String,
    public_repos: u64,
    followers: u64,
}

pub(crate) fn build_report(body: &[u8]) -> Result<Report, ReportError> {
    let user: GithubUser = serde_json::from_slice(body)?;

    let mut report = Report::new();
    report.push("login", user.login);
    report.push(
        "name",
        user.name.unwrap_or_else(|| NO_NAME_DEFAULT.to_string()),
    );
    report.push(
        "location",
        user.location.unwrap_or_else(|| UNKNOWN_DEFAULT.to_string()),
    );
    report.push("avatar", user.avatar_url);
    report.push("public_repos", user.public_repos.to_string());
    report.push("followers", user.followers.to_string());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_profile() {
        let body = json!({
            "login": "octocat",
            "name": "The Octocat",
            "location": "San Francisco",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "public_repos": 8,
            "followers": 4000,
            "following": 9
        });

        let report = build_report(body.to_string().as_bytes()).unwrap();
        assert_eq!(report.get("login"), Some("octocat"));
        assert_eq!(report.get("name"), Some("The Octocat"));
        assert_eq!(report.get("location"), Some("San Francisco"));
        assert_eq!(
            report.get("avatar"),
            Some("https://avatars.githubusercontent.com/u/583231")
        );
        assert_eq!(report.get("public_repos"), Some("8"));
        assert_eq!(report.get("followers"), Some("4000"));
        assert_eq!(report.len(), 6);
    }

    #[test]
    fn test_missing_optionals_get_defaults() {
        let body = json!({
            "login": "octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "public_repos": 8,
            "followers": 4000
        });

        let report = build_report(body.to_string().as_bytes()).unwrap();
        assert_eq!(report.get("name"), Some(NO_NAME_DEFAULT));
        assert_eq!(report.get("location"), Some(UNKNOWN_DEFAULT));
    }

    #[test]
    fn test_null_optionals_get_defaults() {
        // GitHub sends explicit nulls rather than omitting the keys
        let body = json!({
            "login": "octocat",
            "name": null,
            "location": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "public_repos": 8,
            "followers": 4000
        });

        let report = build_report(body.to_string().as_bytes()).unwrap();
        assert_eq!(report.get("name"), Some(NO_NAME_DEFAULT));
        assert_eq!(report.get("location"), Some(UNKNOWN_DEFAULT));
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let body = json!({
            "name": "The Octocat",
            "public_repos": 8
        });

        let result = build_report(body.to_string().as_bytes());
        assert!(matches!(result, Err(ReportError::Malformed(_))));
    }
}
