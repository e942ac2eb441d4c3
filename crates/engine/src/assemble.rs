use ndarray::Array2;
use starmap_protocol::{ClusteredRepository, RepositoryRecord};

/// Zips records, labels, and layout rows back together by index.
///
/// Pure; the output list matches the input list in length and order. The
/// caller guarantees `labels` and `embedding` carry one entry per record.
#[must_use]
pub fn assemble(
    records: &[RepositoryRecord],
    labels: &[u32],
    embedding: &Array2<f32>,
) -> Vec<ClusteredRepository> {
    records
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(row, (record, label))| ClusteredRepository {
            repository: record.clone(),
            cluster_label: *label,
            coordinates: [embedding[[row, 0]], embedding[[row, 1]]],
        })
        .collect()
}
