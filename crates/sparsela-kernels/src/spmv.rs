//! Sparse matrix-vector product y = A @ x

use crate::utility::util::PAR_THRESHOLD;
use rayon::prelude::*;
use sparsela_core::{Coo, Csc, Csr};

/// y = A @ x for COO; duplicate triplets contribute additively.
///
/// # Panics
/// - If `x.len() != a.ncols()`
#[must_use]
pub fn spmv_coo_f64(a: &Coo<f64, usize>, x: &[f64]) -> Vec<f64> {
    assert_eq!(x.len(), a.ncols(), "x length must equal ncols");
    let mut y = vec![0.0f64; a.nrows()];
    for (i, j, v) in a.triplets() {
        y[i] += v * x[j];
    }
    y
}

/// y = A @ x for CSR, one output row per task once the matrix is large.
///
/// # Panics
/// - If `x.len() != a.ncols()`
#[must_use]
pub fn spmv_csr_f64(a: &Csr<f64, usize>, x: &[f64]) -> Vec<f64> {
    assert_eq!(x.len(), a.ncols(), "x length must equal ncols");
    let row_dot = |i: usize| {
        let (cols, vals) = a.row_segment(i);
        cols.iter().zip(vals).fold(0.0f64, |s, (&j, &v)| s + v * x[j])
    };
    if a.nnz() < PAR_THRESHOLD {
        (0..a.nrows()).map(row_dot).collect()
    } else {
        (0..a.nrows()).into_par_iter().map(row_dot).collect()
    }
}

/// y = A @ x for CSC, scattering each column scaled by `x[j]`.
///
/// # Panics
/// - If `x.len() != a.ncols()`
#[must_use]
pub fn spmv_csc_f64(a: &Csc<f64, usize>, x: &[f64]) -> Vec<f64> {
    assert_eq!(x.len(), a.ncols(), "x length must equal ncols");
    let mut y = vec![0.0f64; a.nrows()];
    for (j, &xj) in x.iter().enumerate() {
        let (rows, vals) = a.col_segment(j);
        for (&i, &v) in rows.iter().zip(vals) {
            y[i] += v * xj;
        }
    }
    y
}
