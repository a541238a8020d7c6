//! Tolerance-based removal of stored entries

use sparsela_core::{Coo, ZERO_TOL};

/// prune triplets with |v| <= eps (returns new COO)
///
/// A negative `eps` keeps every triplet. Order of the retained triplets is
/// unchanged.
#[must_use]
pub fn prune_eps_coo(a: &Coo<f64, usize>, eps: f64) -> Coo<f64, usize> {
    if eps < 0.0 {
        return a.clone();
    }
    let nnz = a.nnz();
    let mut row = Vec::with_capacity(nnz);
    let mut col = Vec::with_capacity(nnz);
    let mut data = Vec::with_capacity(nnz);
    for (i, j, v) in a.triplets() {
        if v.abs() > eps {
            row.push(i);
            col.push(j);
            data.push(v);
        }
    }
    log::trace!("prune_eps_coo: kept {} of {} triplets (eps={eps:e})", data.len(), nnz);
    Coo::from_parts_unchecked(a.nrows(), a.ncols(), row, col, data)
}

/// eliminate numerical noise, i.e. triplets with |v| <= `ZERO_TOL`
#[must_use]
pub fn eliminate_zeros_coo(a: &Coo<f64, usize>) -> Coo<f64, usize> {
    prune_eps_coo(a, ZERO_TOL)
}
