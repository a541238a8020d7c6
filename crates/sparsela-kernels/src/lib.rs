//! Kernels for sparsela: conversions, arithmetic and LU solving (pure Rust)
//!
//! COO carries the native arithmetic; CSR and CSC convert through it. Large
//! inputs fan out over rayon's global pool (`RAYON_NUM_THREADS` applies),
//! small ones stay on the calling thread. Results are identical either way.

pub mod arith;
pub mod convert;
pub mod dense;
pub mod linalg;
pub mod matrix;
pub mod spmv;
pub mod transform;
pub mod utility;

pub use arith::{
    add_coo_f64, add_csc_f64, add_csr_f64, mul_scalar_coo_f64, mul_scalar_csc_f64,
    mul_scalar_csr_f64,
};
pub use convert::{
    coo_to_csc_f64, coo_to_csr_f64, csc_to_coo_f64, csc_to_csr_f64, csr_to_coo_f64,
    csr_to_csc_f64,
};
pub use dense::{
    coo_from_dense, coo_to_dense, csc_from_dense, csc_from_dense_tol, csc_to_dense,
    csr_from_dense, csr_from_dense_tol, csr_to_dense,
};
pub use linalg::{
    find_det_with_lu, lu_decomposition, matmul_coo_f64, matmul_csc_f64, matmul_csr_f64,
    solve_slae_lu,
};
pub use matrix::{add, matmul, matvec, scalar_multiply, to_dense, transpose, Format, Matrix, SparseMatrix};
pub use spmv::{spmv_coo_f64, spmv_csc_f64, spmv_csr_f64};
pub use transform::{transpose_coo_f64, transpose_csc_f64, transpose_csr_f64};
pub use utility::prune::{eliminate_zeros_coo, prune_eps_coo};
pub use utility::util::scale_values;
