//! Merge history for agglomerative clustering.
//!
//! A dendrogram is the ordered record of cluster merges produced by the
//! bottom-up merge loop. Each [`Merge`] stores the member sets involved, so
//! any flat clustering can be recovered by replaying a prefix of the history.

use crate::error::Result;

/// A single merge event.
///
/// Records which two clusters combined, at what single-linkage distance, and
/// the resulting member set. Member order within a cluster carries no
/// meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    /// Members of the first cluster merged.
    pub left: Vec<usize>,
    /// Members of the second cluster merged.
    pub right: Vec<usize>,
    /// Single-linkage distance at which the merge occurred.
    pub distance: f64,
    /// Members of the resulting cluster (`left` ∪ `right`).
    pub merged: Vec<usize>,
}

/// The full merge history over `n` original points.
///
/// A valid history holds exactly `n - 1` merges; the final merge's member set
/// is `{0, …, n-1}`. The trivial `n == 1` dendrogram holds no merges.
#[derive(Debug, Clone, PartialEq)]
pub struct Dendrogram {
    /// Merge events, in the order they were performed.
    merges: Vec<Merge>,
    /// Number of original points.
    n_items: usize,
}

impl Dendrogram {
    /// Create an empty dendrogram for `n_items` points.
    pub(crate) fn new(n_items: usize) -> Self {
        Self {
            merges: Vec::with_capacity(n_items.saturating_sub(1)),
            n_items,
        }
    }

    /// Record a merge. Only the clusterer appends; events are immutable after.
    pub(crate) fn add_merge(&mut self, merge: Merge) {
        self.merges.push(merge);
    }

    /// Number of original points.
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Number of merges recorded.
    pub fn n_merges(&self) -> usize {
        self.merges.len()
    }

    /// Iterate over merges in execution order.
    pub fn merges(&self) -> impl Iterator<Item = &Merge> {
        self.merges.iter()
    }

    /// The merge distances, in execution order.
    pub fn distances(&self) -> Vec<f64> {
        self.merges.iter().map(|m| m.distance).collect()
    }

    /// The flat final cluster: every original point index, ascending.
    pub fn final_cluster(&self) -> Vec<usize> {
        match self.merges.last() {
            Some(last) => {
                let mut members = last.merged.clone();
                members.sort_unstable();
                members
            }
            None => (0..self.n_items).collect(),
        }
    }

    /// Cluster labels after replaying the first `n_merges` merges.
    fn labels_after(&self, n_merges: usize) -> Vec<usize> {
        let mut labels: Vec<usize> = (0..self.n_items).collect();

        for (step, merge) in self.merges.iter().take(n_merges).enumerate() {
            let new_id = self.n_items + step;
            for &p in &merge.merged {
                labels[p] = new_id;
            }
        }

        // Renumber to consecutive integers.
        let mut unique = labels.clone();
        unique.sort_unstable();
        unique.dedup();

        labels
            .iter()
            .map(|&l| unique.iter().position(|&u| u == l).unwrap_or(0))
            .collect()
    }

    /// Cluster labels at a distance threshold.
    ///
    /// All merges with distance greater than `threshold` are "cut", leaving
    /// the clusters that existed below it.
    pub fn cut_at_distance(&self, threshold: f64) -> Vec<usize> {
        let applied = self
            .merges
            .iter()
            .take_while(|m| m.distance <= threshold)
            .count();
        self.labels_after(applied)
    }

    /// Cluster labels for exactly `k` clusters.
    ///
    /// Degenerate `k` (zero, or more clusters than points) yields the
    /// identity labeling, one cluster per point.
    pub fn cut_to_k(&self, k: usize) -> Result<Vec<usize>> {
        if k == 0 || k > self.n_items {
            return Ok((0..self.n_items).collect());
        }

        let needed = self.n_items - k;
        Ok(self.labels_after(needed.min(self.merges.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_point_history() -> Dendrogram {
        // Points 0,1 close together, point 2 far away.
        let mut dendro = Dendrogram::new(3);
        dendro.add_merge(Merge {
            left: vec![0],
            right: vec![1],
            distance: 1.0,
            merged: vec![0, 1],
        });
        dendro.add_merge(Merge {
            left: vec![0, 1],
            right: vec![2],
            distance: 9.0,
            merged: vec![0, 1, 2],
        });
        dendro
    }

    #[test]
    fn test_trivial_dendrogram() {
        let dendro = Dendrogram::new(1);
        assert_eq!(dendro.n_items(), 1);
        assert_eq!(dendro.n_merges(), 0);
        assert_eq!(dendro.final_cluster(), vec![0]);
    }

    #[test]
    fn test_final_cluster_sorted() {
        let dendro = three_point_history();
        assert_eq!(dendro.final_cluster(), vec![0, 1, 2]);
        assert_eq!(dendro.distances(), vec![1.0, 9.0]);
    }

    #[test]
    fn test_cut_at_distance() {
        let dendro = three_point_history();

        // Below the first merge: everything separate.
        let labels = dendro.cut_at_distance(0.5);
        assert_eq!(labels, vec![0, 1, 2]);

        // Between the merges: {0,1} together, {2} apart.
        let labels = dendro.cut_at_distance(5.0);
        assert_eq!(labels[0], labels[1]);
        assert_ne!(labels[0], labels[2]);

        // Above everything: one cluster.
        let labels = dendro.cut_at_distance(100.0);
        assert!(labels.iter().all(|&l| l == labels[0]));
    }

    #[test]
    fn test_cut_to_k() {
        let dendro = three_point_history();

        let labels = dendro.cut_to_k(2).unwrap();
        assert_eq!(labels[0], labels[1]);
        assert_ne!(labels[0], labels[2]);

        let labels = dendro.cut_to_k(3).unwrap();
        assert_eq!(labels, vec![0, 1, 2]);

        let labels = dendro.cut_to_k(1).unwrap();
        assert!(labels.iter().all(|&l| l == labels[0]));
    }

    #[test]
    fn test_cut_to_k_degenerate() {
        let dendro = three_point_history();
        assert_eq!(dendro.cut_to_k(0).unwrap(), vec![0, 1, 2]);
        assert_eq!(dendro.cut_to_k(10).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_labels_are_consecutive() {
        let dendro = three_point_history();
        let labels = dendro.cut_to_k(2).unwrap();
        let max = *labels.iter().max().unwrap();
        assert_eq!(max, 1);
    }
}
