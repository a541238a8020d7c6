//! Validation shared by the compressed layouts

use crate::error::{Error, Result};

/// Checks a compressed pointer/index/value triple.
///
/// `major` is the number of segments (rows for CSR, columns for CSC) and
/// `minor` bounds the stored secondary indices. Ordering within a segment is
/// not checked here.
pub(crate) fn check_compressed(
    major: usize,
    minor: usize,
    minor_axis: &'static str,
    indptr: &[usize],
    indices: &[usize],
    data: &[f64],
) -> Result<()> {
    let Some(expected_len) = major.checked_add(1) else {
        return Err(Error::IndptrLength {
            expected: usize::MAX,
            got: indptr.len(),
        });
    };
    if indptr.len() != expected_len {
        return Err(Error::IndptrLength {
            expected: expected_len,
            got: indptr.len(),
        });
    }
    if indices.len() != data.len() {
        return Err(Error::LengthMismatch {
            what: "indices and data",
            expected: data.len(),
            got: indices.len(),
        });
    }
    let first = indptr.first().copied().unwrap_or(0);
    if first != 0 {
        return Err(Error::IndptrStart { first });
    }
    for (position, w) in indptr.windows(2).enumerate() {
        if w[0] > w[1] {
            return Err(Error::IndptrNotMonotonic {
                position,
                prev: w[0],
                next: w[1],
            });
        }
    }
    let nnz = data.len();
    let last = indptr.last().copied().unwrap_or(0);
    if last != nnz {
        return Err(Error::IndptrTerminal { last, nnz });
    }
    for &index in indices {
        if index >= minor {
            return Err(Error::IndexOutOfBounds {
                axis: minor_axis,
                index,
                bound: minor,
            });
        }
    }
    Ok(())
}
