use serde::{Deserialize, Serialize};

/// Neighborhood radius for the density clusterer, in embedded [0,1] space.
pub const DEFAULT_EPS: f32 = 0.2;

/// Minimum neighborhood size (the point itself included) for a core point.
pub const DEFAULT_MIN_PTS: usize = 5;

/// Fixed default seed so repeated runs over the same input reproduce the
/// same layout and labels. Callers wanting a different embedding supply a
/// different seed; retrying with the same seed would recur identically.
pub const DEFAULT_SEED: u64 = 42;

/// Parameters of one clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub eps: f32,
    pub min_pts: usize,
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            min_pts: DEFAULT_MIN_PTS,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub const fn with_eps(mut self, eps: f32) -> Self {
        self.eps = eps;
        self
    }

    #[must_use]
    pub const fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
