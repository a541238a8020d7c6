#![allow(
    clippy::many_single_char_names,
    reason = "Math kernels conventionally use i/j/k/p for indices"
)]
use crate::utility::util::PAR_THRESHOLD;
use rayon::prelude::*;
use sparsela_core::{Coo, Csc, Csr, ZERO_TOL};

/// (indptr, secondary indices, values) of a compressed layout
type Compressed = (Vec<usize>, Vec<usize>, Vec<f64>);

/// Bucket `(major, minor, value)` triplets by `major` into compressed storage.
///
/// Within each bucket values sharing a `minor` index are summed first, sums
/// with |v| <= `tol` are dropped next, and the retained entries end up in
/// ascending `minor` order. A duplicate pair that cancels out therefore
/// disappears instead of leaving an explicit zero behind.
fn compress_triplets<It>(nmajor: usize, nnz_hint: usize, triplets: It, tol: f64) -> Compressed
where
    It: Iterator<Item = (usize, usize, f64)>,
{
    let mut buckets: Vec<Vec<(usize, f64)>> = vec![Vec::new(); nmajor];
    for (major, minor, v) in triplets {
        buckets[major].push((minor, v));
    }

    let coalesce = |bucket: &mut Vec<(usize, f64)>| {
        // stable: duplicates are summed in insertion order
        bucket.sort_by_key(|&(minor, _)| minor);
        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(bucket.len());
        for &(minor, v) in bucket.iter() {
            match merged.last_mut() {
                Some(last) if last.0 == minor => last.1 += v,
                _ => merged.push((minor, v)),
            }
        }
        merged.retain(|&(_, v)| v.abs() > tol);
        *bucket = merged;
    };
    if nnz_hint < PAR_THRESHOLD {
        buckets.iter_mut().for_each(coalesce);
    } else {
        buckets.par_iter_mut().for_each(coalesce);
    }

    let mut indptr = Vec::with_capacity(nmajor + 1);
    let mut indices = Vec::with_capacity(nnz_hint);
    let mut data = Vec::with_capacity(nnz_hint);
    indptr.push(0);
    for bucket in buckets {
        for (minor, v) in bucket {
            indices.push(minor);
            data.push(v);
        }
        indptr.push(data.len());
    }
    (indptr, indices, data)
}

/// Convert COO -> CSR, summing duplicates, dropping noise and sorting columns within rows.
#[must_use]
pub fn coo_to_csr_f64(a: &Coo<f64, usize>) -> Csr<f64, usize> {
    let (indptr, indices, data) = compress_triplets(a.nrows(), a.nnz(), a.triplets(), ZERO_TOL);
    log::trace!("coo_to_csr: {} triplets -> {} stored", a.nnz(), data.len());
    Csr::from_parts_unchecked(a.nrows(), a.ncols(), indptr, indices, data)
}

/// Convert COO -> CSC, summing duplicates, dropping noise and sorting rows within columns.
#[must_use]
pub fn coo_to_csc_f64(a: &Coo<f64, usize>) -> Csc<f64, usize> {
    let swapped = a.triplets().map(|(i, j, v)| (j, i, v));
    let (indptr, indices, data) = compress_triplets(a.ncols(), a.nnz(), swapped, ZERO_TOL);
    log::trace!("coo_to_csc: {} triplets -> {} stored", a.nnz(), data.len());
    Csc::from_parts_unchecked(a.nrows(), a.ncols(), indptr, indices, data)
}

/// Convert CSR -> COO, emitting triplets row by row.
#[must_use]
pub fn csr_to_coo_f64(a: &Csr<f64, usize>) -> Coo<f64, usize> {
    let nnz = a.nnz();
    let mut row = Vec::with_capacity(nnz);
    for (i, w) in a.indptr().windows(2).enumerate() {
        row.extend(std::iter::repeat(i).take(w[1] - w[0]));
    }
    Coo::from_parts_unchecked(a.nrows(), a.ncols(), row, a.indices().to_vec(), a.data().to_vec())
}

/// Convert CSC -> COO, emitting triplets column by column.
#[must_use]
pub fn csc_to_coo_f64(a: &Csc<f64, usize>) -> Coo<f64, usize> {
    let nnz = a.nnz();
    let mut col = Vec::with_capacity(nnz);
    for (j, w) in a.indptr().windows(2).enumerate() {
        col.extend(std::iter::repeat(j).take(w[1] - w[0]));
    }
    Coo::from_parts_unchecked(a.nrows(), a.ncols(), a.indices().to_vec(), col, a.data().to_vec())
}

/// Convert CSR -> CSC (through COO)
#[must_use]
pub fn csr_to_csc_f64(a: &Csr<f64, usize>) -> Csc<f64, usize> {
    coo_to_csc_f64(&csr_to_coo_f64(a))
}

/// Convert CSC -> CSR (through COO)
#[must_use]
pub fn csc_to_csr_f64(a: &Csc<f64, usize>) -> Csr<f64, usize> {
    coo_to_csr_f64(&csc_to_coo_f64(a))
}
