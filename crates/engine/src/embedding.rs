use crate::error::{EngineError, Result};
use ndarray::{Array2, Axis};

/// The layout is always two-dimensional.
pub const OUTPUT_DIM: usize = 2;

/// Global bandwidth of the high-dimensional similarity kernel. A single
/// fixed value for all points, not tuned per point.
const BANDWIDTH: f32 = 1.0;

const LEARNING_RATE: f32 = 100.0;
const INIT_SCALE: f32 = 1e-4;
const MIN_ITERATIONS: usize = 50;
const MAX_ITERATIONS: usize = 100;

/// Epsilon added to min-max denominators so degenerate axes divide to zero.
const MINMAX_EPS: f32 = 1e-6;

/// Computes a 2-D layout for the standardized rows, each axis normalized
/// into [0, 1].
///
/// Fewer than three points skip the iterative procedure entirely: the
/// probability computations degenerate there, so the standardized matrix is
/// min-max rescaled into [-1, 1] and its first two columns become the layout.
/// That path has no randomness at all.
///
/// For three points or more the layout is fitted iteratively from a seeded
/// initialization. If the gradient updates ever produce a non-finite
/// coordinate the iterative path is abandoned for a linear projection of the
/// standardized matrix. Every path ends in the same per-axis [0, 1]
/// normalization, and no error ever reaches the caller.
#[must_use]
pub fn embed(standardized: &Array2<f32>, seed: u64) -> Array2<f32> {
    let points = standardized.nrows();
    if points == 0 {
        return Array2::zeros((0, OUTPUT_DIM));
    }

    let layout = if points < 3 {
        small_input_layout(standardized)
    } else {
        match iterative_layout(standardized, seed) {
            Ok(coords) => coords,
            Err(err) => {
                log::warn!("embedding fell back to linear projection: {err}");
                first_two_columns(&min_max_columns(standardized))
            }
        }
    };

    min_max_columns(&layout)
}

/// One fitted layout, or `NumericalInstability` if the updates diverged.
fn iterative_layout(standardized: &Array2<f32>, seed: u64) -> Result<Array2<f32>> {
    let points = standardized.nrows();

    let high_dists = pairwise_squared_distances(standardized);
    let p = similarity_rows(&high_dists, 2.0 * BANDWIDTH);
    if !all_finite(&p) {
        return Err(EngineError::NumericalInstability(
            "high-dimensional similarity matrix is not finite".to_string(),
        ));
    }

    let iterations = iteration_count(points);
    log::debug!("fitting {points} points over {iterations} iterations");

    (0..iterations).try_fold(initial_coordinates(points, seed), |coords, _| {
        gradient_step(&p, coords)
    })
}

/// One descent step: recompute the low-dimensional similarities and pull the
/// coordinates toward the high-dimensional structure.
///
/// The low-dimensional kernel is a bare negative exponential of squared
/// distance, with none of the heavy-tailed correction canonical neighbor
/// embeddings apply. That asymmetry against the high-dimensional kernel is
/// intentional, observed behavior.
fn gradient_step(p: &Array2<f32>, coords: Array2<f32>) -> Result<Array2<f32>> {
    let low_dists = pairwise_squared_distances(&coords);
    let q = similarity_rows(&low_dists, 1.0);

    let diff = p - &q;
    let next = &coords + &(diff.dot(&coords) * LEARNING_RATE);
    if all_finite(&next) {
        Ok(next)
    } else {
        Err(EngineError::NumericalInstability(
            "gradient update produced non-finite coordinates".to_string(),
        ))
    }
}

/// `clamp(round(N * 0.5), 50, 100)`.
fn iteration_count(points: usize) -> usize {
    (((points as f32) * 0.5).round() as usize).clamp(MIN_ITERATIONS, MAX_ITERATIONS)
}

/// Full pairwise squared Euclidean distances via the Gram matrix.
fn pairwise_squared_distances(matrix: &Array2<f32>) -> Array2<f32> {
    let points = matrix.nrows();
    let norms: Vec<f32> = matrix.rows().into_iter().map(|row| row.dot(&row)).collect();
    let gram = matrix.dot(&matrix.t());

    let mut dists = Array2::zeros((points, points));
    for i in 0..points {
        for j in 0..points {
            // Clamp the tiny negatives the Gram expansion can produce.
            dists[[i, j]] = (norms[i] + norms[j] - 2.0 * gram[[i, j]]).max(0.0);
        }
    }
    dists
}

/// `exp(-d² / divisor)`, row-normalized so each row sums to 1.
fn similarity_rows(squared_dists: &Array2<f32>, divisor: f32) -> Array2<f32> {
    let mut sims = squared_dists.mapv(|d| (-d / divisor).exp());
    for mut row in sims.axis_iter_mut(Axis(0)) {
        let sum = row.sum();
        if sum > 0.0 {
            row.mapv_inplace(|v| v / sum);
        }
    }
    sims
}

/// Small-magnitude deterministic start coordinates derived from the seed.
fn initial_coordinates(points: usize, seed: u64) -> Array2<f32> {
    let mut state = seed ^ (points as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut coords = Array2::zeros((points, OUTPUT_DIM));
    for value in &mut coords {
        *value = unit_float(splitmix64(&mut state)).mul_add(2.0, -1.0) * INIT_SCALE;
    }
    coords
}

const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Maps the high bits into [0, 1) by stuffing them into a float mantissa.
fn unit_float(bits: u64) -> f32 {
    let mantissa = ((bits >> 32) as u32) >> 9;
    f32::from_bits(0x3f80_0000 | mantissa) - 1.0
}

/// Layout for N < 3: per-column min-max, rescaled into [-1, 1].
fn small_input_layout(standardized: &Array2<f32>) -> Array2<f32> {
    let scaled = min_max_columns(standardized).mapv(|v| v.mul_add(2.0, -1.0));
    first_two_columns(&scaled)
}

/// Per-column min-max into [0, 1] with an epsilon denominator. Constant
/// columns (and single rows) map to 0.
fn min_max_columns(matrix: &Array2<f32>) -> Array2<f32> {
    let mut normalized = matrix.clone();
    for mut column in normalized.axis_iter_mut(Axis(1)) {
        let min = column.iter().copied().fold(f32::INFINITY, f32::min);
        let max = column.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let denom = (max - min) + MINMAX_EPS;
        column.mapv_inplace(|v| (v - min) / denom);
    }
    normalized
}

/// First two columns as an N×2 matrix, duplicating the last available column
/// when fewer than two exist.
fn first_two_columns(matrix: &Array2<f32>) -> Array2<f32> {
    let points = matrix.nrows();
    if matrix.ncols() == 0 {
        return Array2::zeros((points, OUTPUT_DIM));
    }

    let mut out = Array2::zeros((points, OUTPUT_DIM));
    for row in 0..points {
        for col in 0..OUTPUT_DIM {
            let source = col.min(matrix.ncols() - 1);
            out[[row, col]] = matrix[[row, source]];
        }
    }
    out
}

fn all_finite(matrix: &Array2<f32>) -> bool {
    matrix.iter().all(|v| v.is_finite())
}
