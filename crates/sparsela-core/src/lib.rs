//! Core data structures for sparsela (pure Rust)
//!
//! Storage types for the three classical sparse layouts plus the dense
//! aliases they convert to and from. Every constructor that accepts raw
//! arrays validates them eagerly; algorithms live in `sparsela-kernels`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Magnitude at or below which a stored value is treated as numerical noise.
pub const ZERO_TOL: f64 = 1e-12;

mod compressed;
pub mod coo;
pub mod csc;
pub mod csr;
pub mod dense;
pub mod error;

pub use coo::Coo;
pub use csc::Csc;
pub use csr::Csr;
pub use dense::{dense_shape, zeros, DenseMatrix, Vector};
pub use error::{Error, Result};
