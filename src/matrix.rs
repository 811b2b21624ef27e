//! Validated pairwise-distance input.
//!
//! A [`DistanceMatrix`] is the sole input to clustering: a symmetric `n×n`
//! matrix of non-negative distances with a zero diagonal. All preconditions
//! are checked once at construction; downstream code treats a constructed
//! matrix as trustworthy and never re-validates inside the merge loop.

use crate::error::{Error, Result};
use ndarray::Array2;

/// Default absolute tolerance for the symmetry check.
pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A validated symmetric pairwise-distance matrix over points `0..n`.
///
/// Invariants, enforced at construction:
/// - square with `n >= 1`
/// - `d(i, j) == d(j, i)` within tolerance
/// - `d(i, i) == 0`
/// - every entry non-negative and finite-or-infinite (never NaN)
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    values: Array2<f64>,
}

impl DistanceMatrix {
    /// Validate a raw matrix with the default symmetry tolerance.
    pub fn new(values: Array2<f64>) -> Result<Self> {
        Self::with_tolerance(values, DEFAULT_SYMMETRY_TOLERANCE)
    }

    /// Validate a raw matrix with an explicit symmetry tolerance.
    pub fn with_tolerance(values: Array2<f64>, tolerance: f64) -> Result<Self> {
        let (rows, cols) = values.dim();
        if rows == 0 {
            return Err(Error::EmptyInput);
        }
        if rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }

        for i in 0..rows {
            let diag = values[[i, i]];
            if diag != 0.0 {
                return Err(Error::NonzeroDiagonal {
                    index: i,
                    value: diag,
                });
            }
            for j in 0..cols {
                let v = values[[i, j]];
                // `!(v >= 0.0)` also rejects NaN.
                if !(v >= 0.0) {
                    return Err(Error::NegativeEntry {
                        row: i,
                        col: j,
                        value: v,
                    });
                }
            }
        }

        for i in 0..rows {
            for j in (i + 1)..cols {
                let delta = (values[[i, j]] - values[[j, i]]).abs();
                if delta > tolerance {
                    return Err(Error::Asymmetric {
                        row: i,
                        col: j,
                        delta,
                    });
                }
            }
        }

        Ok(Self { values })
    }

    /// Build from nested rows, e.g. a literal `vec![vec![...], ...]`.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyInput);
        }
        let n = rows.len();

        let mut flat: Vec<f64> = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(Error::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            flat.extend(row);
        }
        let values = Array2::from_shape_vec((n, n), flat)
            .map_err(|_| Error::NotSquare { rows: n, cols: n })?;
        Self::new(values)
    }

    /// Compute a distance matrix from raw points and a metric.
    ///
    /// Each off-diagonal entry is evaluated once and mirrored, so the result
    /// is symmetric bit-for-bit regardless of the metric's own rounding.
    ///
    /// ```rust
    /// use agglo::DistanceMatrix;
    ///
    /// let points = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
    /// let m = DistanceMatrix::from_points(&points, |a, b| {
    ///     a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
    /// }).unwrap();
    /// assert_eq!(m.get(0, 1), 5.0);
    /// ```
    pub fn from_points<F>(points: &[Vec<f64>], metric: F) -> Result<Self>
    where
        F: Fn(&[f64], &[f64]) -> f64,
    {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        let n = points.len();
        let dim = points[0].len();
        if let Some(p) = points.iter().find(|p| p.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: p.len(),
            });
        }

        let mut values = Array2::zeros((n, n));
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric(&points[i], &points[j]);
                values[[i, j]] = d;
                values[[j, i]] = d;
            }
        }
        Self::new(values)
    }

    /// Number of points.
    pub fn n(&self) -> usize {
        self.values.nrows()
    }

    /// Distance between points `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range, like any slice access.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    /// Borrow the underlying matrix.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
}
