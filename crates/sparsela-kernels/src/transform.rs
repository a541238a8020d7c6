use crate::convert::{coo_to_csc_f64, coo_to_csr_f64, csc_to_coo_f64, csr_to_coo_f64};
use sparsela_core::{Coo, Csc, Csr};

/// Transpose COO -> COO by swapping the index arrays and the shape
#[must_use]
pub fn transpose_coo_f64(a: &Coo<f64, usize>) -> Coo<f64, usize> {
    Coo::from_parts_unchecked(
        a.ncols(),
        a.nrows(),
        a.col().to_vec(),
        a.row().to_vec(),
        a.data().to_vec(),
    )
}

/// Transpose CSR -> CSC (via COO)
#[must_use]
pub fn transpose_csr_f64(a: &Csr<f64, usize>) -> Csc<f64, usize> {
    coo_to_csc_f64(&transpose_coo_f64(&csr_to_coo_f64(a)))
}

/// Transpose CSC -> CSR (via COO)
#[must_use]
pub fn transpose_csc_f64(a: &Csc<f64, usize>) -> Csr<f64, usize> {
    coo_to_csr_f64(&transpose_coo_f64(&csc_to_coo_f64(a)))
}
