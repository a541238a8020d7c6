//! Addition and scalar multiplication.
//!
//! COO owns the only native addition; the compressed layouts convert both
//! operands to COO, add there and convert back.

use crate::convert::{coo_to_csc_f64, coo_to_csr_f64, csc_to_coo_f64, csr_to_coo_f64};
use crate::utility::prune::eliminate_zeros_coo;
use crate::utility::util::scale_values;
use sparsela_core::{Coo, Csc, Csr};
use std::collections::BTreeMap;

/// Emits an ordered `(row, col) -> value` accumulator as COO, then drops noise.
pub(crate) fn coo_from_accumulator(
    nrows: usize,
    ncols: usize,
    acc: BTreeMap<(usize, usize), f64>,
) -> Coo<f64, usize> {
    if acc.is_empty() {
        return Coo::empty(nrows, ncols);
    }
    let mut row = Vec::with_capacity(acc.len());
    let mut col = Vec::with_capacity(acc.len());
    let mut data = Vec::with_capacity(acc.len());
    for ((i, j), v) in acc {
        row.push(i);
        col.push(j);
        data.push(v);
    }
    eliminate_zeros_coo(&Coo::from_parts_unchecked(nrows, ncols, row, col, data))
}

/// C = A + B for COO operands of equal shape.
///
/// The result is sorted by `(row, col)` with duplicates merged and noise removed.
///
/// # Panics
/// - If the shapes differ
#[must_use]
pub fn add_coo_f64(a: &Coo<f64, usize>, b: &Coo<f64, usize>) -> Coo<f64, usize> {
    assert_eq!(a.shape(), b.shape(), "add requires equal shapes");
    let mut acc: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    for (i, j, v) in a.triplets().chain(b.triplets()) {
        *acc.entry((i, j)).or_insert(0.0) += v;
    }
    coo_from_accumulator(a.nrows(), a.ncols(), acc)
}

/// C = A + B for CSR operands (through COO).
#[must_use]
pub fn add_csr_f64(a: &Csr<f64, usize>, b: &Csr<f64, usize>) -> Csr<f64, usize> {
    coo_to_csr_f64(&add_coo_f64(&csr_to_coo_f64(a), &csr_to_coo_f64(b)))
}

/// C = A + B for CSC operands (through COO).
#[must_use]
pub fn add_csc_f64(a: &Csc<f64, usize>, b: &Csc<f64, usize>) -> Csc<f64, usize> {
    coo_to_csc_f64(&add_coo_f64(&csc_to_coo_f64(a), &csc_to_coo_f64(b)))
}

/// alpha * A for COO.
///
/// Noise is eliminated only for a non-zero `alpha`; scaling by zero keeps the
/// (now zero-valued) triplets.
#[must_use]
pub fn mul_scalar_coo_f64(a: &Coo<f64, usize>, alpha: f64) -> Coo<f64, usize> {
    let (row, col, mut data) = a.clone().into_parts();
    scale_values(&mut data, alpha);
    let out = Coo::from_parts_unchecked(a.nrows(), a.ncols(), row, col, data);
    if alpha == 0.0 {
        out
    } else {
        eliminate_zeros_coo(&out)
    }
}

/// alpha * A for CSR; scaling by zero collapses to an empty structure.
#[must_use]
pub fn mul_scalar_csr_f64(a: &Csr<f64, usize>, alpha: f64) -> Csr<f64, usize> {
    if alpha == 0.0 {
        return Csr::empty(a.nrows(), a.ncols());
    }
    let (indptr, indices, mut data) = a.clone().into_parts();
    scale_values(&mut data, alpha);
    Csr::from_parts_unchecked(a.nrows(), a.ncols(), indptr, indices, data)
}

/// alpha * A for CSC; scaling by zero collapses to an empty structure.
#[must_use]
pub fn mul_scalar_csc_f64(a: &Csc<f64, usize>, alpha: f64) -> Csc<f64, usize> {
    if alpha == 0.0 {
        return Csc::empty(a.nrows(), a.ncols());
    }
    let (indptr, indices, mut data) = a.clone().into_parts();
    scale_values(&mut data, alpha);
    Csc::from_parts_unchecked(a.nrows(), a.ncols(), indptr, indices, data)
}
