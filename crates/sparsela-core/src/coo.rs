//! COO format definition and constructors

use crate::error::{Error, Result};

/// Coordinate-list storage: parallel `(data, row, col)` triplets.
///
/// Triplets are neither sorted nor deduplicated; explicit zeros and repeated
/// `(row, col)` pairs are kept until a kernel cleans them up.
#[derive(Debug, Clone, PartialEq)]
pub struct Coo<T, I> {
    data: Vec<T>,
    row: Vec<I>, // length nnz
    col: Vec<I>, // length nnz
    nrows: usize,
    ncols: usize,
}

impl<T, I> Coo<T, I> {
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.data.len()
    }
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
    #[inline]
    #[must_use]
    pub const fn nrows(&self) -> usize {
        self.nrows
    }
    #[inline]
    #[must_use]
    pub const fn ncols(&self) -> usize {
        self.ncols
    }
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }
    #[inline]
    #[must_use]
    pub fn row(&self) -> &[I] {
        &self.row
    }
    #[inline]
    #[must_use]
    pub fn col(&self) -> &[I] {
        &self.col
    }

    /// Moves the storage out as `(row, col, data)`.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Vec<I>, Vec<I>, Vec<T>) {
        (self.row, self.col, self.data)
    }
}

impl Coo<f64, usize> {
    /// Builds a COO matrix, rejecting mismatched lengths and out-of-range indices.
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        row: Vec<usize>,
        col: Vec<usize>,
        data: Vec<f64>,
    ) -> Result<Self> {
        if row.len() != data.len() {
            return Err(Error::LengthMismatch {
                what: "row and data",
                expected: data.len(),
                got: row.len(),
            });
        }
        if col.len() != data.len() {
            return Err(Error::LengthMismatch {
                what: "col and data",
                expected: data.len(),
                got: col.len(),
            });
        }
        if !data.is_empty() && (nrows == 0 || ncols == 0) {
            return Err(Error::EntriesInEmptyShape { nrows, ncols });
        }
        for (&i, &j) in row.iter().zip(col.iter()) {
            if i >= nrows {
                return Err(Error::IndexOutOfBounds {
                    axis: "row",
                    index: i,
                    bound: nrows,
                });
            }
            if j >= ncols {
                return Err(Error::IndexOutOfBounds {
                    axis: "column",
                    index: j,
                    bound: ncols,
                });
            }
        }
        Ok(Self {
            data,
            row,
            col,
            nrows,
            ncols,
        })
    }

    /// Builds a COO matrix whose invariants the caller already guarantees.
    #[inline]
    #[must_use]
    pub fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        row: Vec<usize>,
        col: Vec<usize>,
        data: Vec<f64>,
    ) -> Self {
        debug_assert!(row.len() == data.len() && col.len() == data.len());
        debug_assert!(row.iter().all(|&i| i < nrows));
        debug_assert!(col.iter().all(|&j| j < ncols));
        Self {
            data,
            row,
            col,
            nrows,
            ncols,
        }
    }

    /// Empty matrix of the given shape.
    #[inline]
    #[must_use]
    pub const fn empty(nrows: usize, ncols: usize) -> Self {
        Self {
            data: Vec::new(),
            row: Vec::new(),
            col: Vec::new(),
            nrows,
            ncols,
        }
    }

    /// Iterates stored triplets as `(row, col, value)` in storage order.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.row
            .iter()
            .zip(self.col.iter())
            .zip(self.data.iter())
            .map(|((&i, &j), &v)| (i, j, v))
    }
}
