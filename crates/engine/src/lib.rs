//! # Starmap Engine
//!
//! Local embedding-and-clustering for starred-repository metadata.
//!
//! ## Features
//!
//! - **Pure local computation** - no service call on this path
//! - **2-D neighbor embedding** - iterative, probability-matching layout
//! - **Density clustering** - DBSCAN-style grouping with a noise label
//! - **Graceful degradation** - numerical trouble falls back to a linear
//!   projection instead of failing the run
//!
//! ## Architecture
//!
//! ```text
//! RepositoryRecord[]
//!     │
//!     ├──> Feature Extractor
//!     │      └─> N×7 feature matrix (log-damped counts, topics, language)
//!     │
//!     ├──> Standardizer
//!     │      └─> per-column mean 0 / unit variance (epsilon floor)
//!     │
//!     ├──> Embedder
//!     │      ├─ pairwise similarities (fixed global bandwidth)
//!     │      ├─ seeded gradient iterations (N ≥ 3)
//!     │      └─> N×2 layout, each axis min-maxed into [0,1]
//!     │
//!     ├──> Density Clusterer
//!     │      └─> labels: 0 = noise, 1..K = clusters
//!     │
//!     └──> Result Assembler
//!            └─> ClusteredRepository[] in input order
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use starmap_engine::{ClusterEngine, EngineConfig};
//! use starmap_protocol::RepositoryRecord;
//!
//! let engine = ClusterEngine::new(EngineConfig::default().with_eps(0.25));
//! let records: Vec<RepositoryRecord> = vec![/* from the repository source */];
//! for item in engine.cluster(&records) {
//!     println!(
//!         "{} -> cluster {} at ({:.2}, {:.2})",
//!         item.repository.full_name,
//!         item.cluster_label,
//!         item.coordinates[0],
//!         item.coordinates[1]
//!     );
//! }
//! ```

mod assemble;
mod cluster;
mod config;
mod embedding;
mod engine;
mod error;
mod features;
mod standardize;

pub use cluster::DensityClusterer;
pub use config::{EngineConfig, DEFAULT_EPS, DEFAULT_MIN_PTS, DEFAULT_SEED};
pub use embedding::{embed, OUTPUT_DIM};
pub use engine::ClusterEngine;
pub use error::{EngineError, Result};
pub use features::{extract_features, feature_vector, FEATURE_DIM};
pub use standardize::standardize;

// Re-export protocol types for convenience
pub use starmap_protocol::{ClusteredRepository, RepositoryRecord};
