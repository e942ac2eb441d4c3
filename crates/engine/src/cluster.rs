use crate::embedding::OUTPUT_DIM;
use crate::error::{EngineError, Result};
use ndarray::Array2;
use std::collections::VecDeque;

/// Internal point state. Only plain labels leave this module: 0 is reserved
/// for final noise, so "not yet processed" must never be encoded as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Unvisited,
    Noise,
    Cluster(u32),
}

/// Density-based grouping over the 2-D layout.
///
/// Points with at least `min_pts` neighbors within `eps` (themselves
/// included) are core points; clusters grow breadth-first from them. Points
/// reachable only as neighbors join without expanding further, and points
/// never reached stay noise. Deterministic for a given input order — the
/// stage has no randomness.
pub struct DensityClusterer {
    eps: f32,
    min_pts: usize,
}

impl DensityClusterer {
    #[must_use]
    pub const fn new(eps: f32, min_pts: usize) -> Self {
        Self { eps, min_pts }
    }

    /// Labels every row of the embedding: 0 for noise, contiguous ids from 1
    /// for clusters.
    pub fn label(&self, embedding: &Array2<f32>) -> Result<Vec<u32>> {
        if embedding.ncols() != OUTPUT_DIM {
            return Err(EngineError::InvalidDimension {
                expected: OUTPUT_DIM,
                actual: embedding.ncols(),
            });
        }

        let points = embedding.nrows();
        if points == 0 {
            return Ok(Vec::new());
        }

        let neighbors = self.neighborhoods(embedding);
        let mut labels = vec![Label::Unvisited; points];
        let mut next_cluster = 0u32;

        for point in 0..points {
            if labels[point] != Label::Unvisited {
                continue;
            }
            if neighbors[point].len() < self.min_pts {
                // Provisional: may still be absorbed as a border point.
                labels[point] = Label::Noise;
                continue;
            }

            next_cluster += 1;
            labels[point] = Label::Cluster(next_cluster);

            let mut queue: VecDeque<usize> = neighbors[point].iter().copied().collect();
            while let Some(candidate) = queue.pop_front() {
                match labels[candidate] {
                    Label::Cluster(_) => {}
                    Label::Noise => {
                        // Border point: joins the cluster, expands nothing.
                        labels[candidate] = Label::Cluster(next_cluster);
                    }
                    Label::Unvisited => {
                        labels[candidate] = Label::Cluster(next_cluster);
                        if neighbors[candidate].len() >= self.min_pts {
                            queue.extend(neighbors[candidate].iter().copied());
                        }
                    }
                }
            }
        }

        log::debug!(
            "labeled {points} points into {next_cluster} clusters (eps {}, min_pts {})",
            self.eps,
            self.min_pts
        );

        Ok(labels
            .into_iter()
            .map(|label| match label {
                Label::Cluster(id) => id,
                Label::Unvisited | Label::Noise => 0,
            })
            .collect())
    }

    /// Neighbor index lists within `eps`, each point included in its own set.
    fn neighborhoods(&self, embedding: &Array2<f32>) -> Vec<Vec<usize>> {
        let points = embedding.nrows();
        let mut neighbors = vec![Vec::new(); points];
        for i in 0..points {
            for j in 0..points {
                let dx = embedding[[i, 0]] - embedding[[j, 0]];
                let dy = embedding[[i, 1]] - embedding[[j, 1]];
                if (dx * dx + dy * dy).sqrt() <= self.eps {
                    neighbors[i].push(j);
                }
            }
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_dense_groups_form_two_clusters() {
        let embedding = array![
            [0.0, 0.0],
            [0.02, 0.01],
            [0.01, 0.02],
            [0.9, 0.9],
            [0.91, 0.89],
        ];
        let labels = DensityClusterer::new(0.1, 2)
            .label(&embedding)
            .expect("2-d embedding");

        assert_eq!(labels, vec![1, 1, 1, 2, 2]);
        assert!(labels.iter().all(|&l| l > 0), "no noise expected");
    }

    #[test]
    fn isolated_points_are_all_noise() {
        let embedding = array![[0.5, 0.5], [0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let labels = DensityClusterer::new(0.1, 2)
            .label(&embedding)
            .expect("2-d embedding");
        assert_eq!(labels, vec![0, 0, 0, 0]);
    }

    #[test]
    fn border_point_joins_but_does_not_expand() {
        // 0-3 are a dense core; 4 hangs off point 3 only; 5 hangs off 4 only.
        // 4 is reachable from the core but not core itself, so 5 stays out.
        let embedding = array![
            [0.0, 0.0],
            [0.01, 0.0],
            [0.02, 0.0],
            [0.03, 0.0],
            [0.075, 0.0],
            [0.12, 0.0],
        ];
        let labels = DensityClusterer::new(0.05, 4)
            .label(&embedding)
            .expect("2-d embedding");

        assert_eq!(labels[0], 1);
        assert_eq!(labels[1], 1);
        assert_eq!(labels[2], 1);
        assert_eq!(labels[3], 1);
        assert_eq!(labels[4], 1, "border point absorbed");
        assert_eq!(labels[5], 0, "beyond the border stays noise");
    }

    #[test]
    fn labels_are_contiguous_from_one() {
        let embedding = array![
            [0.0, 0.0],
            [0.01, 0.01],
            [0.5, 0.5],
            [0.51, 0.51],
            [0.99, 0.01],
            [0.98, 0.02],
        ];
        let labels = DensityClusterer::new(0.05, 2)
            .label(&embedding)
            .expect("2-d embedding");

        let mut cluster_ids: Vec<u32> = labels.iter().copied().filter(|&l| l > 0).collect();
        cluster_ids.sort_unstable();
        cluster_ids.dedup();
        assert_eq!(cluster_ids, vec![1, 2, 3]);
    }

    #[test]
    fn relabeling_is_deterministic() {
        let embedding = array![
            [0.1, 0.1],
            [0.12, 0.11],
            [0.11, 0.12],
            [0.8, 0.8],
            [0.82, 0.79],
            [0.81, 0.81],
        ];
        let clusterer = DensityClusterer::new(0.2, 2);
        let first = clusterer.label(&embedding).expect("2-d embedding");
        let second = clusterer.label(&embedding).expect("2-d embedding");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_planar_embedding() {
        let embedding = Array2::<f32>::zeros((3, 3));
        let result = DensityClusterer::new(0.2, 5).label(&embedding);
        assert!(matches!(
            result,
            Err(EngineError::InvalidDimension {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn empty_embedding_yields_no_labels() {
        let embedding = Array2::<f32>::zeros((0, 2));
        let labels = DensityClusterer::new(0.2, 5).label(&embedding).expect("empty");
        assert!(labels.is_empty());
    }
}
