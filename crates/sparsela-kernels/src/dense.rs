//! Conversions between the sparse layouts and dense row-major matrices.
//!
//! The factories differ on purpose: [`coo_from_dense`] keeps every entry that
//! is not exactly zero, while [`csr_from_dense`] and [`csc_from_dense`] drop
//! entries whose magnitude is at or below the zero tolerance.

use crate::utility::util::PAR_THRESHOLD;
use rayon::prelude::*;
use sparsela_core::{dense_shape, zeros, Coo, Csc, Csr, DenseMatrix, Result, ZERO_TOL};

/// Dense copy of a COO matrix; duplicate triplets are summed into one cell.
#[must_use]
pub fn coo_to_dense(a: &Coo<f64, usize>) -> DenseMatrix {
    let mut dense = zeros(a.nrows(), a.ncols());
    for (i, j, v) in a.triplets() {
        dense[i][j] += v;
    }
    dense
}

/// Dense copy of a CSR matrix.
#[must_use]
pub fn csr_to_dense(a: &Csr<f64, usize>) -> DenseMatrix {
    let mut dense = zeros(a.nrows(), a.ncols());
    let fill = |(i, out): (usize, &mut Vec<f64>)| {
        let (cols, vals) = a.row_segment(i);
        for (&j, &v) in cols.iter().zip(vals) {
            out[j] = v;
        }
    };
    if a.nnz() < PAR_THRESHOLD {
        dense.iter_mut().enumerate().for_each(fill);
    } else {
        dense.par_iter_mut().enumerate().for_each(fill);
    }
    dense
}

/// Dense copy of a CSC matrix.
#[must_use]
pub fn csc_to_dense(a: &Csc<f64, usize>) -> DenseMatrix {
    let mut dense = zeros(a.nrows(), a.ncols());
    for j in 0..a.ncols() {
        let (rows, vals) = a.col_segment(j);
        for (&i, &v) in rows.iter().zip(vals) {
            dense[i][j] = v;
        }
    }
    dense
}

/// COO from a dense matrix, keeping entries that are not exactly zero.
///
/// Scans row-major, so the triplets come out sorted by `(row, col)`. An empty
/// dense matrix yields shape `(0, 0)`.
pub fn coo_from_dense(dense: &[Vec<f64>]) -> Result<Coo<f64, usize>> {
    let (nrows, ncols) = dense_shape(dense)?;
    Ok(coo_from_rect(dense, nrows, ncols))
}

/// Row-major exact-zero scan of a dense matrix already known to be `nrows x ncols`.
pub(crate) fn coo_from_rect(dense: &[Vec<f64>], nrows: usize, ncols: usize) -> Coo<f64, usize> {
    let mut row = Vec::new();
    let mut col = Vec::new();
    let mut data = Vec::new();
    for (i, values) in dense.iter().enumerate() {
        for (j, &v) in values.iter().enumerate() {
            if v != 0.0 {
                row.push(i);
                col.push(j);
                data.push(v);
            }
        }
    }
    Coo::from_parts_unchecked(nrows, ncols, row, col, data)
}

/// CSR from a dense matrix, dropping entries with |v| <= `ZERO_TOL`.
pub fn csr_from_dense(dense: &[Vec<f64>]) -> Result<Csr<f64, usize>> {
    csr_from_dense_tol(dense, ZERO_TOL)
}

/// CSR from a dense matrix, dropping entries with |v| <= `tol`.
pub fn csr_from_dense_tol(dense: &[Vec<f64>], tol: f64) -> Result<Csr<f64, usize>> {
    let (nrows, ncols) = dense_shape(dense)?;
    let mut indptr = Vec::with_capacity(nrows + 1);
    let mut indices = Vec::new();
    let mut data = Vec::new();
    indptr.push(0);
    for values in dense {
        for (j, &v) in values.iter().enumerate() {
            if v.abs() > tol {
                indices.push(j);
                data.push(v);
            }
        }
        indptr.push(data.len());
    }
    Ok(Csr::from_parts_unchecked(nrows, ncols, indptr, indices, data))
}

/// CSC from a dense matrix, dropping entries with |v| <= `ZERO_TOL`.
pub fn csc_from_dense(dense: &[Vec<f64>]) -> Result<Csc<f64, usize>> {
    csc_from_dense_tol(dense, ZERO_TOL)
}

/// CSC from a dense matrix, dropping entries with |v| <= `tol`.
pub fn csc_from_dense_tol(dense: &[Vec<f64>], tol: f64) -> Result<Csc<f64, usize>> {
    let (nrows, ncols) = dense_shape(dense)?;
    Ok(csc_from_rect(dense, nrows, ncols, tol))
}

/// Column-major scan of a dense matrix already known to be `nrows x ncols`.
pub(crate) fn csc_from_rect(dense: &[Vec<f64>], nrows: usize, ncols: usize, tol: f64) -> Csc<f64, usize> {
    let mut indptr = Vec::with_capacity(ncols + 1);
    let mut indices = Vec::new();
    let mut data = Vec::new();
    indptr.push(0);
    for j in 0..ncols {
        for (i, values) in dense.iter().enumerate() {
            let v = values[j];
            if v.abs() > tol {
                indices.push(i);
                data.push(v);
            }
        }
        indptr.push(data.len());
    }
    Csc::from_parts_unchecked(nrows, ncols, indptr, indices, data)
}
