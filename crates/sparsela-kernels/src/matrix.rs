//! The matrix contract shared by the three storage layouts.
//!
//! [`Matrix`] is the capability interface each layout implements with its
//! own kernels. Its `*_unchecked` hooks assume compatible operands; the free
//! functions [`add`], [`scalar_multiply`], [`matmul`] and [`matvec`] check
//! shapes (or the scalar) once and then delegate. Every operation returns a
//! fresh [`SparseMatrix`].
//!
//! | receiver | add / scale / matmul result | transpose result |
//! |----------|-----------------------------|------------------|
//! | COO      | COO                         | COO              |
//! | CSR      | CSR                         | CSC              |
//! | CSC      | CSC                         | CSR              |

use crate::arith::{
    add_coo_f64, add_csc_f64, add_csr_f64, mul_scalar_coo_f64, mul_scalar_csc_f64,
    mul_scalar_csr_f64,
};
use crate::convert::{
    coo_to_csc_f64, coo_to_csr_f64, csc_to_coo_f64, csc_to_csr_f64, csr_to_coo_f64,
    csr_to_csc_f64,
};
use crate::dense::{coo_from_rect, coo_to_dense, csc_to_dense, csr_to_dense};
use crate::linalg::matmul::{matmul_coo_f64, matmul_csc_f64, matmul_csr_f64};
use crate::spmv::{spmv_coo_f64, spmv_csc_f64, spmv_csr_f64};
use crate::transform::{transpose_coo_f64, transpose_csc_f64, transpose_csr_f64};
use sparsela_core::{Coo, Csc, Csr, DenseMatrix, Error, Result, Vector};
use std::borrow::Cow;
use std::fmt;

/// Storage layout tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Coo,
    Csr,
    Csc,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Coo => "coo",
            Self::Csr => "csr",
            Self::Csc => "csc",
        };
        f.write_str(name)
    }
}

/// Capability interface implemented by every sparse layout.
pub trait Matrix {
    /// `(nrows, ncols)`
    fn shape(&self) -> (usize, usize);
    /// Number of stored entries, explicit zeros and duplicates included.
    fn nnz(&self) -> usize;
    fn format(&self) -> Format;
    /// Dense row-major copy.
    fn to_dense(&self) -> DenseMatrix;
    /// Triplet copy in storage order.
    fn to_coo(&self) -> Coo<f64, usize>;
    /// CSR copy; converting from another layout sums duplicates and drops noise.
    fn to_csr(&self) -> Csr<f64, usize>;
    /// CSC copy; converting from another layout sums duplicates and drops noise.
    fn to_csc(&self) -> Csc<f64, usize>;
    /// Transposed copy: COO stays COO, CSR becomes CSC and CSC becomes CSR.
    fn transpose(&self) -> SparseMatrix;

    /// Borrow the receiver as COO when that is its storage.
    fn as_coo(&self) -> Option<&Coo<f64, usize>> {
        None
    }

    /// `self + other`; shapes must already be equal.
    fn add_unchecked(&self, other: &dyn Matrix) -> SparseMatrix;
    /// `alpha * self`; `alpha` must already be a number.
    fn scale_unchecked(&self, alpha: f64) -> SparseMatrix;
    /// `self @ other`; `self.ncols` must already equal `other.nrows`.
    fn matmul_unchecked(&self, other: &dyn Matrix) -> SparseMatrix;
    /// `self @ x`; `x.len()` must already equal `self.ncols`.
    fn matvec_unchecked(&self, x: &[f64]) -> Vector;
}

/// Right operand of a COO kernel: borrowed when already COO, otherwise
/// densified and rebuilt keeping entries that are not exactly zero.
fn coo_operand(other: &dyn Matrix) -> Cow<'_, Coo<f64, usize>> {
    match other.as_coo() {
        Some(coo) => Cow::Borrowed(coo),
        None => {
            let (nrows, ncols) = other.shape();
            Cow::Owned(coo_from_rect(&other.to_dense(), nrows, ncols))
        }
    }
}

impl Matrix for Coo<f64, usize> {
    fn shape(&self) -> (usize, usize) {
        Coo::shape(self)
    }
    fn nnz(&self) -> usize {
        Coo::nnz(self)
    }
    fn format(&self) -> Format {
        Format::Coo
    }
    fn to_dense(&self) -> DenseMatrix {
        coo_to_dense(self)
    }
    fn to_coo(&self) -> Coo<f64, usize> {
        self.clone()
    }
    fn to_csr(&self) -> Csr<f64, usize> {
        coo_to_csr_f64(self)
    }
    fn to_csc(&self) -> Csc<f64, usize> {
        coo_to_csc_f64(self)
    }
    fn transpose(&self) -> SparseMatrix {
        transpose_coo_f64(self).into()
    }
    fn as_coo(&self) -> Option<&Coo<f64, usize>> {
        Some(self)
    }
    fn add_unchecked(&self, other: &dyn Matrix) -> SparseMatrix {
        add_coo_f64(self, &coo_operand(other)).into()
    }
    fn scale_unchecked(&self, alpha: f64) -> SparseMatrix {
        mul_scalar_coo_f64(self, alpha).into()
    }
    fn matmul_unchecked(&self, other: &dyn Matrix) -> SparseMatrix {
        matmul_coo_f64(self, &coo_operand(other)).into()
    }
    fn matvec_unchecked(&self, x: &[f64]) -> Vector {
        spmv_coo_f64(self, x)
    }
}

impl Matrix for Csr<f64, usize> {
    fn shape(&self) -> (usize, usize) {
        Csr::shape(self)
    }
    fn nnz(&self) -> usize {
        Csr::nnz(self)
    }
    fn format(&self) -> Format {
        Format::Csr
    }
    fn to_dense(&self) -> DenseMatrix {
        csr_to_dense(self)
    }
    fn to_coo(&self) -> Coo<f64, usize> {
        csr_to_coo_f64(self)
    }
    fn to_csr(&self) -> Csr<f64, usize> {
        self.clone()
    }
    fn to_csc(&self) -> Csc<f64, usize> {
        csr_to_csc_f64(self)
    }
    fn transpose(&self) -> SparseMatrix {
        transpose_csr_f64(self).into()
    }
    fn add_unchecked(&self, other: &dyn Matrix) -> SparseMatrix {
        match other.format() {
            Format::Csr => add_csr_f64(self, &other.to_csr()).into(),
            _ => coo_to_csr_f64(&add_coo_f64(&self.to_coo(), &other.to_coo())).into(),
        }
    }
    fn scale_unchecked(&self, alpha: f64) -> SparseMatrix {
        mul_scalar_csr_f64(self, alpha).into()
    }
    fn matmul_unchecked(&self, other: &dyn Matrix) -> SparseMatrix {
        match other.format() {
            Format::Csr => matmul_csr_f64(self, &other.to_csr()).into(),
            _ => coo_to_csr_f64(&matmul_coo_f64(&self.to_coo(), &other.to_coo())).into(),
        }
    }
    fn matvec_unchecked(&self, x: &[f64]) -> Vector {
        spmv_csr_f64(self, x)
    }
}

impl Matrix for Csc<f64, usize> {
    fn shape(&self) -> (usize, usize) {
        Csc::shape(self)
    }
    fn nnz(&self) -> usize {
        Csc::nnz(self)
    }
    fn format(&self) -> Format {
        Format::Csc
    }
    fn to_dense(&self) -> DenseMatrix {
        csc_to_dense(self)
    }
    fn to_coo(&self) -> Coo<f64, usize> {
        csc_to_coo_f64(self)
    }
    fn to_csr(&self) -> Csr<f64, usize> {
        csc_to_csr_f64(self)
    }
    fn to_csc(&self) -> Csc<f64, usize> {
        self.clone()
    }
    fn transpose(&self) -> SparseMatrix {
        transpose_csc_f64(self).into()
    }
    fn add_unchecked(&self, other: &dyn Matrix) -> SparseMatrix {
        match other.format() {
            Format::Csc => add_csc_f64(self, &other.to_csc()).into(),
            _ => coo_to_csc_f64(&add_coo_f64(&self.to_coo(), &other.to_coo())).into(),
        }
    }
    fn scale_unchecked(&self, alpha: f64) -> SparseMatrix {
        mul_scalar_csc_f64(self, alpha).into()
    }
    fn matmul_unchecked(&self, other: &dyn Matrix) -> SparseMatrix {
        match other.format() {
            Format::Csc => matmul_csc_f64(self, &other.to_csc()).into(),
            _ => coo_to_csc_f64(&matmul_coo_f64(&self.to_coo(), &other.to_coo())).into(),
        }
    }
    fn matvec_unchecked(&self, x: &[f64]) -> Vector {
        spmv_csc_f64(self, x)
    }
}

/// A matrix in any of the three layouts; the result of every contract operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SparseMatrix {
    Coo(Coo<f64, usize>),
    Csr(Csr<f64, usize>),
    Csc(Csc<f64, usize>),
}

impl From<Coo<f64, usize>> for SparseMatrix {
    fn from(a: Coo<f64, usize>) -> Self {
        Self::Coo(a)
    }
}

impl From<Csr<f64, usize>> for SparseMatrix {
    fn from(a: Csr<f64, usize>) -> Self {
        Self::Csr(a)
    }
}

impl From<Csc<f64, usize>> for SparseMatrix {
    fn from(a: Csc<f64, usize>) -> Self {
        Self::Csc(a)
    }
}

macro_rules! dispatch {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            SparseMatrix::Coo($m) => $body,
            SparseMatrix::Csr($m) => $body,
            SparseMatrix::Csc($m) => $body,
        }
    };
}

impl SparseMatrix {
    #[must_use]
    pub fn as_csr(&self) -> Option<&Csr<f64, usize>> {
        match self {
            Self::Csr(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_csc(&self) -> Option<&Csc<f64, usize>> {
        match self {
            Self::Csc(a) => Some(a),
            _ => None,
        }
    }

    /// `self + other`, see [`add`].
    pub fn add(&self, other: &dyn Matrix) -> Result<SparseMatrix> {
        add(self, other)
    }

    /// `alpha * self`, see [`scalar_multiply`].
    pub fn scalar_multiply(&self, alpha: f64) -> Result<SparseMatrix> {
        scalar_multiply(self, alpha)
    }

    /// `self @ other`, see [`matmul`].
    pub fn matmul(&self, other: &dyn Matrix) -> Result<SparseMatrix> {
        matmul(self, other)
    }
}

impl Matrix for SparseMatrix {
    fn shape(&self) -> (usize, usize) {
        dispatch!(self, m => Matrix::shape(m))
    }
    fn nnz(&self) -> usize {
        dispatch!(self, m => Matrix::nnz(m))
    }
    fn format(&self) -> Format {
        dispatch!(self, m => m.format())
    }
    fn to_dense(&self) -> DenseMatrix {
        dispatch!(self, m => m.to_dense())
    }
    fn to_coo(&self) -> Coo<f64, usize> {
        dispatch!(self, m => m.to_coo())
    }
    fn to_csr(&self) -> Csr<f64, usize> {
        dispatch!(self, m => m.to_csr())
    }
    fn to_csc(&self) -> Csc<f64, usize> {
        dispatch!(self, m => m.to_csc())
    }
    fn transpose(&self) -> SparseMatrix {
        dispatch!(self, m => m.transpose())
    }
    fn as_coo(&self) -> Option<&Coo<f64, usize>> {
        match self {
            Self::Coo(a) => Some(a),
            _ => None,
        }
    }
    fn add_unchecked(&self, other: &dyn Matrix) -> SparseMatrix {
        dispatch!(self, m => m.add_unchecked(other))
    }
    fn scale_unchecked(&self, alpha: f64) -> SparseMatrix {
        dispatch!(self, m => m.scale_unchecked(alpha))
    }
    fn matmul_unchecked(&self, other: &dyn Matrix) -> SparseMatrix {
        dispatch!(self, m => m.matmul_unchecked(other))
    }
    fn matvec_unchecked(&self, x: &[f64]) -> Vector {
        dispatch!(self, m => m.matvec_unchecked(x))
    }
}

/// `a + b`; fails with `ShapeMismatch` unless both shapes are equal.
pub fn add(a: &dyn Matrix, b: &dyn Matrix) -> Result<SparseMatrix> {
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            op: "add",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(a.add_unchecked(b))
}

/// `alpha * a`; fails with `TypeMismatch` when `alpha` is NaN.
pub fn scalar_multiply(a: &dyn Matrix, alpha: f64) -> Result<SparseMatrix> {
    if alpha.is_nan() {
        return Err(Error::TypeMismatch(format!("{alpha}")));
    }
    Ok(a.scale_unchecked(alpha))
}

/// `a @ b`; fails with `ShapeMismatch` unless `a.ncols == b.nrows`.
pub fn matmul(a: &dyn Matrix, b: &dyn Matrix) -> Result<SparseMatrix> {
    if a.shape().1 != b.shape().0 {
        return Err(Error::ShapeMismatch {
            op: "matmul",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(a.matmul_unchecked(b))
}

/// `a @ x`; fails with `ShapeMismatch` unless `x.len() == a.ncols`.
pub fn matvec(a: &dyn Matrix, x: &[f64]) -> Result<Vector> {
    if a.shape().1 != x.len() {
        return Err(Error::ShapeMismatch {
            op: "matvec",
            lhs: a.shape(),
            rhs: (x.len(), 1),
        });
    }
    Ok(a.matvec_unchecked(x))
}

/// Transposed copy of `a` (see the module table for the result layout).
#[must_use]
pub fn transpose(a: &dyn Matrix) -> SparseMatrix {
    a.transpose()
}

/// Dense copy of `a`.
#[must_use]
pub fn to_dense(a: &dyn Matrix) -> DenseMatrix {
    a.to_dense()
}
