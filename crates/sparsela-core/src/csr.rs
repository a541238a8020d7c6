//! CSR format definition and constructors

use crate::compressed::check_compressed;
use crate::error::Result;

/// Compressed sparse row storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Csr<T, I> {
    nrows: usize,
    ncols: usize,
    indptr: Vec<I>,
    indices: Vec<I>,
    data: Vec<T>,
}

impl<T, I> Csr<T, I> {
    pub fn shape(&self) -> (usize, usize) { (self.nrows, self.ncols) }
    pub fn nnz(&self) -> usize { self.data.len() }
    pub fn nrows(&self) -> usize { self.nrows }
    pub fn ncols(&self) -> usize { self.ncols }
    pub fn indptr(&self) -> &[I] { &self.indptr }
    /// Column index of every stored value.
    pub fn indices(&self) -> &[I] { &self.indices }
    pub fn data(&self) -> &[T] { &self.data }

    /// Moves the storage out as `(indptr, indices, data)`.
    pub fn into_parts(self) -> (Vec<I>, Vec<I>, Vec<T>) {
        (self.indptr, self.indices, self.data)
    }
}

impl Csr<f64, usize> {
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f64>,
    ) -> Result<Self> {
        check_compressed(nrows, ncols, "column", &indptr, &indices, &data)?;
        Ok(Csr { nrows, ncols, indptr, indices, data })
    }

    pub fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f64>,
    ) -> Self {
        debug_assert!(check_compressed(nrows, ncols, "column", &indptr, &indices, &data).is_ok());
        Csr { nrows, ncols, indptr, indices, data }
    }

    /// All-zero matrix: no stored values, pointer array of zeros.
    pub fn empty(nrows: usize, ncols: usize) -> Self {
        Csr { nrows, ncols, indptr: vec![0; nrows + 1], indices: Vec::new(), data: Vec::new() }
    }

    /// Column indices and values stored for row `i`.
    pub fn row_segment(&self, i: usize) -> (&[usize], &[f64]) {
        let s = self.indptr[i];
        let e = self.indptr[i + 1];
        (&self.indices[s..e], &self.data[s..e])
    }
}
