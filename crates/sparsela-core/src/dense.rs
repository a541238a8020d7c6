//! Dense row-major aliases used at the conversion boundary

use crate::error::{Error, Result};

/// Rectangular row-major matrix: `dense[i][j]` is row `i`, column `j`.
pub type DenseMatrix = Vec<Vec<f64>>;
/// Plain vector of values.
pub type Vector = Vec<f64>;

/// Shape of a dense matrix, rejecting ragged input.
///
/// An empty outer vector has shape `(0, 0)`.
pub fn dense_shape(dense: &[Vec<f64>]) -> Result<(usize, usize)> {
    let Some(first) = dense.first() else {
        return Ok((0, 0));
    };
    let ncols = first.len();
    for (row, values) in dense.iter().enumerate() {
        if values.len() != ncols {
            return Err(Error::RaggedDense {
                row,
                expected: ncols,
                got: values.len(),
            });
        }
    }
    Ok((dense.len(), ncols))
}

/// Zero-filled dense matrix of the given shape.
#[inline]
#[must_use]
pub fn zeros(nrows: usize, ncols: usize) -> DenseMatrix {
    vec![vec![0.0f64; ncols]; nrows]
}
