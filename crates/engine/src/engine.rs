use crate::assemble::assemble;
use crate::cluster::DensityClusterer;
use crate::config::EngineConfig;
use crate::embedding::embed;
use crate::error::{EngineError, Result};
use crate::features::extract_features;
use crate::standardize::standardize;
use starmap_protocol::{ClusteredRepository, RepositoryRecord};
use std::sync::Arc;
use tokio::task::spawn_blocking;

/// The local clustering pipeline: features → standardize → embed → label →
/// assemble.
///
/// Every invocation allocates its own matrices and drops them on return, so
/// concurrent runs over independent inputs are safe. The engine does not
/// cancel or debounce: a caller that starts a second run before the first
/// finishes gets both results and is responsible for discarding the stale
/// one (sequence numbers work well). Pairwise stages are O(N²) in time and
/// space — expect degraded interactive latency above a few thousand records.
pub struct ClusterEngine {
    config: EngineConfig,
}

impl ClusterEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the full pipeline synchronously.
    ///
    /// Always returns one output per input, in input order, with every
    /// coordinate in [0, 1]. An empty input short-circuits to an empty
    /// output. Numerical trouble inside the embedder degrades to a linear
    /// projection rather than surfacing an error.
    #[must_use]
    pub fn cluster(&self, records: &[RepositoryRecord]) -> Vec<ClusteredRepository> {
        if records.is_empty() {
            return Vec::new();
        }

        let features = extract_features(records);
        let standardized = standardize(&features);
        let embedding = embed(&standardized, self.config.seed);

        let clusterer = DensityClusterer::new(self.config.eps, self.config.min_pts);
        let labels = match clusterer.label(&embedding) {
            Ok(labels) => labels,
            Err(err) => {
                log::error!("density clustering failed: {err}; labeling all points noise");
                vec![0; records.len()]
            }
        };

        log::debug!(
            "clustered {} repositories into {} clusters ({} noise)",
            records.len(),
            labels.iter().max().copied().unwrap_or(0),
            labels.iter().filter(|&&label| label == 0).count()
        );

        assemble(records, &labels, &embedding)
    }

    /// Async facade over [`ClusterEngine::cluster`] for callers on a runtime.
    ///
    /// The numeric work runs on the blocking pool so it does not stall the
    /// reactor.
    pub async fn cluster_owned(
        self: &Arc<Self>,
        records: Vec<RepositoryRecord>,
    ) -> Result<Vec<ClusteredRepository>> {
        let engine = Arc::clone(self);
        spawn_blocking(move || engine.cluster(&records))
            .await
            .map_err(|e| EngineError::Background(format!("Join error: {e}")))
    }
}

impl Default for ClusterEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
