//! # agglo
//!
//! Single-linkage agglomerative clustering over a precomputed distance
//! matrix, producing the full merge history (dendrogram) rather than just a
//! flat result.
//!
//! Pipeline: build a validated [`DistanceMatrix`] (from a raw matrix or from
//! points plus a metric), run the [`Agglomerator`] merge loop, then read the
//! [`Dendrogram`] — iterate merges, take the final cluster, or cut it to a
//! flat clustering at any height or k.
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
//!
//! assert_eq!(dendro.n_merges(), 3);
//! assert_eq!(dendro.final_cluster(), vec![0, 1, 2, 3]);
//!
//! // Flat clustering from the same history:
//! let labels = dendro.cut_to_k(2).unwrap();
//! assert_eq!(labels.len(), 4);
//! ```
//!
//! The loop is sequential and deterministic (ties break on the first pair in
//! index order). Enable the `parallel` feature to spread the per-iteration
//! minimum-pair scan across rayon workers; the tie-break order is preserved,
//! so output is identical either way.

pub mod agglomerative;
pub mod dendrogram;
/// Error types used across `agglo`.
pub mod error;
pub mod matrix;

pub use agglomerative::{single_linkage_distance, Agglomerator};
pub use dendrogram::{Dendrogram, Merge};
pub use error::{Error, Result};
pub use matrix::{DistanceMatrix, DEFAULT_SYMMETRY_TOLERANCE};
