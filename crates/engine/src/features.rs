use ndarray::Array2;
use starmap_protocol::RepositoryRecord;

/// Width of every feature vector: five count metrics, the topic count, and
/// the has-language flag.
pub const FEATURE_DIM: usize = 7;

/// Encodes one repository as a fixed-width numeric vector.
///
/// Count-like metrics are damped with `ln(1 + x)` so star-heavy outliers do
/// not dominate the standardized columns.
#[must_use]
pub fn feature_vector(record: &RepositoryRecord) -> [f32; FEATURE_DIM] {
    [
        ln_1p(record.stargazers_count),
        ln_1p(record.forks_count),
        ln_1p(record.open_issues_count),
        ln_1p(record.size),
        ln_1p(record.watchers_count),
        record.topics.len() as f32,
        if record.has_language() { 1.0 } else { 0.0 },
    ]
}

/// Maps a record list to an N×7 feature matrix, preserving input order.
///
/// Pure and deterministic. An empty list yields a matrix with zero rows;
/// downstream stages short-circuit on it rather than running matrix math.
#[must_use]
pub fn extract_features(records: &[RepositoryRecord]) -> Array2<f32> {
    let mut matrix = Array2::zeros((records.len(), FEATURE_DIM));
    for (row, record) in records.iter().enumerate() {
        for (col, value) in feature_vector(record).into_iter().enumerate() {
            matrix[[row, col]] = value;
        }
    }
    matrix
}

fn ln_1p(count: u64) -> f32 {
    (count as f32).ln_1p()
}
