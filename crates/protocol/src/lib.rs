//! # Starmap Protocol
//!
//! Shared data types for the starred-repository explorer.
//!
//! The repository shapes mirror the GitHub REST payload field-for-field so
//! they can be deserialized straight from the API response. The remote
//! clustering types mirror the multi-algorithm backend's request/response
//! contract. Both collaborators are consumed through the traits in
//! [`remote`] and [`source`]; the local engine never calls them.

pub mod remote;
pub mod source;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One starred repository, as returned by the repository data source.
///
/// Immutable input to the clustering engine; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    /// Repository size in kilobytes.
    pub size: u64,
    pub watchers_count: u64,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl RepositoryRecord {
    /// Whether a primary language was detected for the repository.
    #[must_use]
    pub const fn has_language(&self) -> bool {
        self.language.is_some()
    }
}

/// One repository with its locally computed cluster membership and 2-D layout.
///
/// The output list of a clustering run has the same length and order as the
/// input list. `cluster_label` 0 means noise; positive labels are contiguous
/// cluster ids starting at 1. Both coordinates lie in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClusteredRepository {
    pub repository: RepositoryRecord,
    pub cluster_label: u32,
    pub coordinates: [f32; 2],
}

impl ClusteredRepository {
    /// Whether the point was left outside every cluster.
    #[must_use]
    pub const fn is_noise(&self) -> bool {
        self.cluster_label == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Trimmed-down GitHub API payload; extra fields must be ignored.
    const REPO_JSON: &str = r#"
    {
        "id": 28457823,
        "node_id": "MDEwOlJlcG9zaXRvcnkyODQ1NzgyMw==",
        "name": "freeCodeCamp",
        "full_name": "freeCodeCamp/freeCodeCamp",
        "description": "freeCodeCamp.org's open-source codebase",
        "html_url": "https://github.com/freeCodeCamp/freeCodeCamp",
        "stargazers_count": 393712,
        "forks_count": 33123,
        "open_issues_count": 241,
        "size": 387251,
        "watchers_count": 393712,
        "language": "TypeScript",
        "topics": ["education", "javascript", "nonprofit"]
    }"#;

    #[test]
    fn repository_record_parses_github_payload() {
        let record: RepositoryRecord = serde_json::from_str(REPO_JSON).expect("parse repo");
        assert_eq!(record.full_name, "freeCodeCamp/freeCodeCamp");
        assert_eq!(record.stargazers_count, 393_712);
        assert_eq!(record.topics.len(), 3);
        assert!(record.has_language());
    }

    #[test]
    fn repository_record_defaults_missing_topics() {
        let record: RepositoryRecord = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "r",
                "full_name": "o/r",
                "description": null,
                "html_url": "https://github.com/o/r",
                "stargazers_count": 0,
                "forks_count": 0,
                "open_issues_count": 0,
                "size": 0,
                "watchers_count": 0,
                "language": null
            }"#,
        )
        .expect("parse repo without topics");
        assert!(record.topics.is_empty());
        assert!(!record.has_language());
    }

    #[test]
    fn clustered_repository_round_trips() {
        let record: RepositoryRecord = serde_json::from_str(REPO_JSON).expect("parse repo");
        let clustered = ClusteredRepository {
            repository: record,
            cluster_label: 2,
            coordinates: [0.25, 0.75],
        };
        let raw = serde_json::to_string(&clustered).expect("serialize");
        let back: ClusteredRepository = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(back, clustered);
        assert!(!back.is_noise());
    }
}
