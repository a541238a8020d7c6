pub mod lu;
pub mod matmul;

pub use lu::{find_det_with_lu, lu_decomposition, solve_slae_lu, DET_UNDERFLOW, PIVOT_TOL};
pub use matmul::{matmul_coo_f64, matmul_csc_f64, matmul_csr_f64};
