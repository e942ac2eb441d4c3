//! Request/response contract of the remote multi-algorithm clustering
//! service (k-means, hierarchical, PCA + hierarchical).
//!
//! This is an opaque boundary: the service computes cluster memberships
//! server-side and returns index lists per cluster. The local engine is an
//! independent path and does not go through this interface.

use crate::RepositoryRecord;
use anyhow::Result;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters sent alongside the repository list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClusteringRequest {
    pub repositories: Vec<RepositoryRecord>,
    pub kmeans_clusters: u32,
    pub hierarchical_threshold: f64,
    pub pca_components: u32,
}

impl Default for ClusteringRequest {
    fn default() -> Self {
        Self {
            repositories: Vec::new(),
            kmeans_clusters: 5,
            hierarchical_threshold: 1.5,
            pca_components: 10,
        }
    }
}

/// Result of one algorithm variant.
///
/// `clusters` maps a cluster id to the indices of the member repositories in
/// the request's `repositories` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClusterResult {
    pub algorithm: String,
    pub clusters: BTreeMap<u32, Vec<usize>>,
    pub parameters: BTreeMap<String, f64>,
    pub processing_time_ms: f64,
}

/// Envelope returned by the service; one entry per requested variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClusteringResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kmeans_clusters: Option<ClusterResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchical_clusters: Option<ClusterResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pca_hierarchical_clusters: Option<ClusterResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub total_processing_time_ms: f64,
}

impl ClusteringResponse {
    /// Turns an `"error"` status into an `Err`, passing the envelope through
    /// otherwise.
    pub fn into_result(self) -> Result<Self> {
        if self.status == "error" {
            let message = self
                .error_message
                .unwrap_or_else(|| "Unknown clustering error".to_string());
            return Err(anyhow::anyhow!(message));
        }
        Ok(self)
    }

    /// Accessor for one algorithm variant by name.
    #[must_use]
    pub fn result_for(&self, algorithm: &str) -> Option<&ClusterResult> {
        match algorithm {
            "kmeans" => self.kmeans_clusters.as_ref(),
            "hierarchical" => self.hierarchical_clusters.as_ref(),
            "pca_hierarchical" => self.pca_hierarchical_clusters.as_ref(),
            _ => None,
        }
    }
}

/// The remote clustering backend, as seen by the frontend.
///
/// Implementations own transport, retry, and health-check policy.
#[async_trait]
pub trait RemoteClusteringService: Send + Sync {
    async fn cluster(&self, request: &ClusteringRequest) -> Result<ClusteringResponse>;

    async fn healthy(&self) -> bool;
}
