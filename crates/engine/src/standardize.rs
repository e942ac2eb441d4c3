use ndarray::{Array2, Axis};

/// Floor added to every column's standard deviation. Small enough not to
/// distort well-scaled columns, large enough that constant columns divide
/// cleanly to zero instead of by zero.
pub const VARIANCE_EPS: f32 = 1e-6;

/// Centers and scales every column to mean 0 and (near) unit variance.
///
/// Cannot fail: the epsilon floor absorbs zero-variance columns, and a
/// zero-row matrix passes through untouched.
#[must_use]
pub fn standardize(features: &Array2<f32>) -> Array2<f32> {
    let rows = features.nrows();
    if rows == 0 {
        return features.clone();
    }

    let mut standardized = features.clone();
    for mut column in standardized.axis_iter_mut(Axis(1)) {
        let mean = column.mean().unwrap_or(0.0);
        let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / rows as f32;
        let denom = variance.sqrt() + VARIANCE_EPS;
        column.mapv_inplace(|v| (v - mean) / denom);
    }
    standardized
}
