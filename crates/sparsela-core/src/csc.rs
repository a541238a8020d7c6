//! CSC format definition and constructors

use crate::compressed::check_compressed;
use crate::error::Result;

/// Compressed sparse column storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Csc<T, I> {
    data: Vec<T>,
    indices: Vec<I>, // row indices per column
    indptr: Vec<I>,  // column pointer, length ncols + 1
    ncols: usize,
    nrows: usize,
}

impl<T, I> Csc<T, I> {
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
    pub fn indptr(&self) -> &[I] {
        &self.indptr
    }
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[I] {
        &self.indices
    }
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Moves the storage out as `(indptr, indices, data)`.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Vec<I>, Vec<I>, Vec<T>) {
        (self.indptr, self.indices, self.data)
    }
}

impl Csc<f64, usize> {
    /// Builds a CSC matrix after validating the pointer array and row indices.
    ///
    /// Row indices inside a column are not required to be sorted here; the
    /// conversion kernels always emit them ascending.
    #[inline]
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f64>,
    ) -> Result<Self> {
        check_compressed(ncols, nrows, "row", &indptr, &indices, &data)?;
        Ok(Self {
            data,
            indices,
            indptr,
            ncols,
            nrows,
        })
    }

    #[inline]
    #[must_use]
    pub fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f64>,
    ) -> Self {
        debug_assert!(check_compressed(ncols, nrows, "row", &indptr, &indices, &data).is_ok());
        Self {
            data,
            indices,
            indptr,
            ncols,
            nrows,
        }
    }

    /// All-zero matrix: no stored values, pointer array of zeros.
    #[inline]
    #[must_use]
    pub fn empty(nrows: usize, ncols: usize) -> Self {
        Self {
            data: Vec::new(),
            indices: Vec::new(),
            indptr: vec![0; ncols + 1],
            ncols,
            nrows,
        }
    }

    /// Row indices and values stored for column `j`.
    #[inline]
    #[must_use]
    pub fn col_segment(&self, j: usize) -> (&[usize], &[f64]) {
        let s = self.indptr[j];
        let e = self.indptr[j + 1];
        (&self.indices[s..e], &self.data[s..e])
    }
}
