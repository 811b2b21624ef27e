use core::fmt;

/// Result alias for `agglo`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by distance-matrix validation and clustering.
///
/// Every variant is an input precondition violation. Validation happens once,
/// eagerly, when a [`crate::DistanceMatrix`] is constructed; the merge loop
/// itself never fails on a validated matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty (`n == 0`): nothing to cluster.
    EmptyInput,

    /// Matrix is not square.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Matrix is not symmetric within tolerance.
    Asymmetric {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// `|d(row, col) - d(col, row)|`.
        delta: f64,
    },

    /// A diagonal entry is not zero.
    NonzeroDiagonal {
        /// Diagonal index.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// An entry is negative or not a number.
    NegativeEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Point-row dimension mismatch (usize).
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// An empty cluster was passed to the linkage distance.
    EmptyCluster,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::NotSquare { rows, cols } => {
                write!(f, "distance matrix is not square: {rows}x{cols}")
            }
            Error::Asymmetric { row, col, delta } => {
                write!(
                    f,
                    "distance matrix is asymmetric at ({row}, {col}): differs by {delta}"
                )
            }
            Error::NonzeroDiagonal { index, value } => {
                write!(f, "nonzero diagonal at index {index}: {value}")
            }
            Error::NegativeEntry { row, col, value } => {
                write!(f, "invalid distance at ({row}, {col}): {value}")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::EmptyCluster => write!(f, "linkage distance over an empty cluster"),
        }
    }
}

impl std::error::Error for Error {}
