//! Sparse matrix-matrix product.
//!
//! COO is the only layout with a native product. It is a hash join on the
//! inner dimension:
//! 1. bucket the right operand's triplets by row: `row -> [(col, val)]`,
//!    keyed only by rows that actually hold entries
//! 2. for every left triplet `(i, k, a)` walk bucket `k` (if any) and add
//!    `a * b` into the accumulator cell `(i, col)`
//! 3. emit the accumulator sorted by `(row, col)` and drop noise
//!
//! Cost is O(nnz(A) * average bucket length); memory is O(nnz), independent of
//! the inner dimension. CSR and CSC multiply through
//! COO and convert the product back to their own layout.

use crate::arith::coo_from_accumulator;
use crate::convert::{coo_to_csc_f64, coo_to_csr_f64, csc_to_coo_f64, csr_to_coo_f64};
use sparsela_core::{Coo, Csc, Csr};
use std::collections::{BTreeMap, HashMap};

/// C = A @ B for COO operands.
///
/// # Panics
/// - If `a.ncols() != b.nrows()`
#[must_use]
pub fn matmul_coo_f64(a: &Coo<f64, usize>, b: &Coo<f64, usize>) -> Coo<f64, usize> {
    assert_eq!(a.ncols(), b.nrows(), "matmul requires a.ncols == b.nrows");
    let mut right_by_row: HashMap<usize, Vec<(usize, f64)>> = HashMap::new();
    for (k, j, v) in b.triplets() {
        right_by_row.entry(k).or_default().push((j, v));
    }

    let mut acc: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    for (i, k, av) in a.triplets() {
        let Some(bucket) = right_by_row.get(&k) else {
            continue;
        };
        for &(j, bv) in bucket {
            *acc.entry((i, j)).or_insert(0.0) += av * bv;
        }
    }
    log::trace!(
        "matmul_coo: {}x{} @ {}x{} -> {} accumulated cells",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols(),
        acc.len()
    );
    coo_from_accumulator(a.nrows(), b.ncols(), acc)
}

/// C = A @ B for CSR operands (through COO)
#[must_use]
pub fn matmul_csr_f64(a: &Csr<f64, usize>, b: &Csr<f64, usize>) -> Csr<f64, usize> {
    coo_to_csr_f64(&matmul_coo_f64(&csr_to_coo_f64(a), &csr_to_coo_f64(b)))
}

/// C = A @ B for CSC operands (through COO)
#[must_use]
pub fn matmul_csc_f64(a: &Csc<f64, usize>, b: &Csc<f64, usize>) -> Csc<f64, usize> {
    coo_to_csc_f64(&matmul_coo_f64(&csc_to_coo_f64(a), &csc_to_coo_f64(b)))
}
