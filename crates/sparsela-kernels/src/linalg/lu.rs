//! Dense LU factorization without pivoting, and the solvers built on it.
//!
//! A matrix that is not square or hits a pivot smaller than [`PIVOT_TOL`]
//! has no factorization here; that outcome is `None`, not an error.
#![allow(
    clippy::needless_range_loop,
    reason = "Index-based loops mirror the triangular recurrences"
)]

use crate::dense::{csc_from_rect, csc_to_dense};
use sparsela_core::{zeros, Csc, Error, Result, Vector, ZERO_TOL};

/// Pivots with magnitude below this are treated as zero.
pub const PIVOT_TOL: f64 = 1e-12;
/// The determinant product stops once its magnitude falls below this.
pub const DET_UNDERFLOW: f64 = 1e-100;

/// Factor `A = L U` with `L` unit lower triangular and `U` upper triangular.
///
/// Row `i` of `U` is computed first from the rows already known, then column
/// `i` of `L` below the diagonal divides by `U[i][i]`. Both factors are
/// rebuilt as CSC with the zero tolerance applied, so exact zeros from the
/// elimination are not stored. `L` always stores its unit diagonal.
#[must_use]
pub fn lu_decomposition(a: &Csc<f64, usize>) -> Option<(Csc<f64, usize>, Csc<f64, usize>)> {
    let (nrows, ncols) = a.shape();
    if nrows != ncols {
        log::debug!("lu_decomposition: matrix {nrows}x{ncols} is not square");
        return None;
    }
    let n = nrows;
    let dense = csc_to_dense(a);
    let mut l = zeros(n, n);
    let mut u = zeros(n, n);

    for i in 0..n {
        for j in i..n {
            let mut s = 0.0f64;
            for k in 0..i {
                s += l[i][k] * u[k][j];
            }
            u[i][j] = dense[i][j] - s;
        }

        l[i][i] = 1.0;
        for j in (i + 1)..n {
            if u[i][i].abs() < PIVOT_TOL {
                log::debug!("lu_decomposition: pivot {i} is {:e}, no factorization", u[i][i]);
                return None;
            }
            let mut s = 0.0f64;
            for k in 0..i {
                s += l[j][k] * u[k][i];
            }
            l[j][i] = (dense[j][i] - s) / u[i][i];
        }
    }

    Some((csc_from_rect(&l, n, n, ZERO_TOL), csc_from_rect(&u, n, n, ZERO_TOL)))
}

/// Solve `A x = b` through the LU factors.
///
/// Returns `Err(ShapeMismatch)` when `b` does not have one entry per row of
/// `A`, and `Ok(None)` when `A` has no factorization or `U` has a pivot below
/// [`PIVOT_TOL`] during back substitution.
pub fn solve_slae_lu(a: &Csc<f64, usize>, b: &[f64]) -> Result<Option<Vector>> {
    if b.len() != a.nrows() {
        return Err(Error::ShapeMismatch {
            op: "solve",
            lhs: a.shape(),
            rhs: (b.len(), 1),
        });
    }
    let Some((l, u)) = lu_decomposition(a) else {
        return Ok(None);
    };
    let n = b.len();

    // Ly = b, unit diagonal
    let l = csc_to_dense(&l);
    let mut y = vec![0.0f64; n];
    for i in 0..n {
        let mut s = 0.0f64;
        for j in 0..i {
            s += l[i][j] * y[j];
        }
        y[i] = b[i] - s;
    }

    // Ux = y
    let u = csc_to_dense(&u);
    let mut x = vec![0.0f64; n];
    for i in (0..n).rev() {
        let mut s = 0.0f64;
        for j in (i + 1)..n {
            s += u[i][j] * x[j];
        }
        if u[i][i].abs() < PIVOT_TOL {
            log::debug!("solve_slae_lu: U[{i}][{i}] is {:e}, system is singular", u[i][i]);
            return Ok(None);
        }
        x[i] = (y[i] - s) / u[i][i];
    }
    Ok(Some(x))
}

/// Determinant as the product of `U`'s diagonal (`det L = 1`).
///
/// The product stops early once its magnitude drops below [`DET_UNDERFLOW`].
#[must_use]
pub fn find_det_with_lu(a: &Csc<f64, usize>) -> Option<f64> {
    let (_, u) = lu_decomposition(a)?;
    let u = csc_to_dense(&u);
    let mut det = 1.0f64;
    for (i, row) in u.iter().enumerate() {
        det *= row[i];
        if det.abs() < DET_UNDERFLOW {
            log::debug!("find_det_with_lu: product underflowed at pivot {i}");
            break;
        }
    }
    Some(det)
}
