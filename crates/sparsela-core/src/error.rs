//! Error types for sparsela
//!
//! Only malformed input travels through [`Error`]. Mathematical
//! non-existence (no LU factorization, singular system) is reported by the
//! solver as `None`.

use thiserror::Error;

/// Result type alias using sparsela's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when constructing or combining matrices
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Parallel arrays that must have the same length do not
    #[error("{what} must have equal length (expected {expected}, got {got})")]
    LengthMismatch {
        /// Which arrays were compared
        what: &'static str,
        /// Length of the reference array
        expected: usize,
        /// Length of the offending array
        got: usize,
    },

    /// A stored row or column index lies outside the shape
    #[error("{axis} index {index} out of bounds [0, {bound})")]
    IndexOutOfBounds {
        /// "row" or "column"
        axis: &'static str,
        /// The invalid index
        index: usize,
        /// Size of that dimension
        bound: usize,
    },

    /// Entries were supplied for a shape with a zero dimension
    #[error("matrix of shape ({nrows}, {ncols}) cannot contain entries")]
    EntriesInEmptyShape {
        /// Number of rows
        nrows: usize,
        /// Number of columns
        ncols: usize,
    },

    /// Pointer array has the wrong number of elements
    #[error("indptr length must be {expected}, got {got}")]
    IndptrLength {
        /// Required length (primary dimension + 1)
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Pointer array does not start at zero
    #[error("indptr first element must be 0, got {first}")]
    IndptrStart {
        /// Actual first element
        first: usize,
    },

    /// Pointer array decreases somewhere
    #[error("indptr must be non-decreasing: {prev} at position {position} exceeds {next} after it")]
    IndptrNotMonotonic {
        /// Position of the larger element
        position: usize,
        /// Value at `position`
        prev: usize,
        /// Value at `position + 1`
        next: usize,
    },

    /// Final pointer disagrees with the number of stored values
    #[error("indptr last element {last} must equal nnz {nnz}")]
    IndptrTerminal {
        /// Final pointer value
        last: usize,
        /// Length of the value and index arrays
        nnz: usize,
    },

    /// Dense input whose rows differ in length
    #[error("dense row {row} has length {got}, expected {expected}")]
    RaggedDense {
        /// First offending row
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("incompatible shapes for {op}: {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        /// Operation name
        op: &'static str,
        /// Left operand shape
        lhs: (usize, usize),
        /// Right operand shape
        rhs: (usize, usize),
    },

    /// Operand is not a usable number
    #[error("scalar must be a number, got {0}")]
    TypeMismatch(String),
}
