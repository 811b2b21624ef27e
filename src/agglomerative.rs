//! Single-linkage agglomerative clustering.
//!
//! Bottom-up clustering over a precomputed distance matrix: start with one
//! singleton cluster per point, then repeatedly merge the two closest
//! clusters until one remains. The merge history forms a **dendrogram** you
//! can cut at any height (or to any k) for a flat clustering.
//!
//! # Single linkage
//!
//! Inter-cluster distance is the minimum pairwise distance:
//!
//! ```text
//! dist(A, B) = min d(p, q)   for p ∈ A, q ∈ B
//! ```
//!
//! Single linkage tends to "chain" elongated clusters; its merge distances
//! are non-decreasing by construction, since every merge happens at the
//! global minimum remaining.
//!
//! # Determinism
//!
//! Ties are broken by the first pair in iteration order (`i` ascending, then
//! `j` ascending), so identical inputs always produce identical merge
//! sequences — with or without the `parallel` feature.
//!
//! # Complexity
//!
//! Full pair rescan per iteration: O(n³) total, O(n²) space. Fine for the
//! small-to-medium n this crate targets; nearest-neighbor-chain acceleration
//! is out of scope.
//!
//! # Example
//!
//! ```rust
//! use agglo::{Agglomerator, DistanceMatrix};
//!
//! let matrix = DistanceMatrix::from_rows(&[
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![1.0, 0.0, 4.0, 5.0],
//!     vec![2.0, 4.0, 0.0, 6.0],
//!     vec![3.0, 5.0, 6.0, 0.0],
//! ]).unwrap();
//!
//! let dendro = Agglomerator::new().fit(&matrix).unwrap();
//! assert_eq!(dendro.n_merges(), 3);
//! assert_eq!(dendro.final_cluster(), vec![0, 1, 2, 3]);
//! ```

use crate::dendrogram::{Dendrogram, Merge};
use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use ndarray::Array2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Single-linkage distance between two disjoint clusters.
///
/// Minimum of `d(p, q)` over the cross product, resolved against the
/// original point-level matrix. A singleton pair is a single lookup.
pub fn single_linkage_distance(
    a: &[usize],
    b: &[usize],
    matrix: &DistanceMatrix,
) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::EmptyCluster);
    }

    let mut best = f64::INFINITY;
    for &p in a {
        for &q in b {
            let d = matrix.get(p, q);
            if d < best {
                best = d;
            }
        }
    }
    Ok(best)
}

/// Single-linkage agglomerative clusterer.
///
/// Stateless; all state lives in the per-call merge loop. `fit` consumes a
/// validated [`DistanceMatrix`] and returns the full [`Dendrogram`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Agglomerator;

impl Agglomerator {
    /// Create a new agglomerator.
    pub fn new() -> Self {
        Self
    }

    /// Run the merge loop to completion.
    ///
    /// Produces exactly `n - 1` merges whose final cluster contains every
    /// point index once. For `n == 1` the dendrogram is trivial (no merges).
    pub fn fit(&self, matrix: &DistanceMatrix) -> Result<Dendrogram> {
        let n = matrix.n();
        let mut clusters: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        // Per-step distance structure, replaced wholesale each iteration.
        let mut structure: Array2<f64> = matrix.values().clone();
        let mut dendro = Dendrogram::new(n);

        while clusters.len() > 1 {
            let k = clusters.len();
            let (bi, bj, distance) = closest_pair(&structure);

            let left = clusters[bi].clone();
            let right = clusters[bj].clone();
            let mut merged = left.clone();
            merged.extend_from_slice(&right);

            // Survivors keep their relative order; the merged cluster is
            // appended last. `survivors[a]` maps new index `a` back to its
            // old structure index, so carried-over entries stay aligned no
            // matter where the merged pair sat.
            let survivors: Vec<usize> = (0..k).filter(|&c| c != bi && c != bj).collect();
            let mut next: Vec<Vec<usize>> = survivors
                .iter()
                .map(|&c| std::mem::take(&mut clusters[c]))
                .collect();
            next.push(merged.clone());

            let m = next.len();
            let mut rebuilt = Array2::zeros((m, m));
            for a in 0..m {
                for b in (a + 1)..m {
                    let d = if b < m - 1 {
                        // Both survivors: the prior value is authoritative.
                        structure[[survivors[a], survivors[b]]]
                    } else {
                        single_linkage_distance(&next[a], &next[b], matrix)?
                    };
                    rebuilt[[a, b]] = d;
                    // Mirrored, never recomputed.
                    rebuilt[[b, a]] = d;
                }
            }

            dendro.add_merge(Merge {
                left,
                right,
                distance,
                merged,
            });
            clusters = next;
            structure = rebuilt;
        }

        Ok(dendro)
    }

    /// Fit and cut to `k` flat clusters in one call.
    pub fn fit_predict(&self, matrix: &DistanceMatrix, k: usize) -> Result<Vec<usize>> {
        let dendro = self.fit(matrix)?;
        dendro.cut_to_k(k)
    }
}

/// Find the closest pair `(i, j)`, `i < j`, in the current structure.
///
/// Ties go to the first pair in `i`-ascending, `j`-ascending order. The
/// parallel path minimizes the triple `(distance, i, j)`, which picks the
/// same winner as the sequential scan.
fn closest_pair(structure: &Array2<f64>) -> (usize, usize, f64) {
    let k = structure.nrows();
    debug_assert!(k >= 2);

    #[cfg(feature = "parallel")]
    let best = {
        let pairs: Vec<(usize, usize)> = (0..k)
            .flat_map(|i| ((i + 1)..k).map(move |j| (i, j)))
            .collect();

        let (d, i, j) = pairs
            .par_iter()
            .map(|&(i, j)| (structure[[i, j]], i, j))
            .reduce(
                || (structure[[0, 1]], 0, 1),
                |a, b| {
                    match a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)) {
                        std::cmp::Ordering::Greater => b,
                        _ => a,
                    }
                },
            );
        (i, j, d)
    };

    #[cfg(not(feature = "parallel"))]
    let best = {
        let mut best = (0, 1, structure[[0, 1]]);
        for i in 0..k {
            for j in (i + 1)..k {
                let d = structure[[i, j]];
                if d < best.2 {
                    best = (i, j, d);
                }
            }
        }
        best
    };

    best
}
