//! Shared constants and small helpers for the kernels
//
// Thresholds decide when a kernel hands work to rayon. Results never depend
// on which path runs.

use rayon::prelude::*;
use wide::f64x4;

/// Below this many stored values (or rows) kernels stay sequential.
pub const PAR_THRESHOLD: usize = 32 * 1024;
/// Chunk length for parallel scans over value arrays.
pub const VALUE_CHUNK: usize = 1024;

/// Multiplies every element by `alpha` in place (SIMD lanes of four).
pub fn scale_values(values: &mut [f64], alpha: f64) {
    let aval = f64x4::splat(alpha);
    let kernel = move |chunk: &mut [f64]| {
        let mut quads = chunk.chunks_exact_mut(4);
        for q in &mut quads {
            let r = f64x4::from([q[0], q[1], q[2], q[3]]) * aval;
            q.copy_from_slice(&r.to_array());
        }
        for v in quads.into_remainder() {
            *v *= alpha;
        }
    };
    if values.len() < PAR_THRESHOLD {
        kernel(values);
    } else {
        values.par_chunks_mut(VALUE_CHUNK).for_each(kernel);
    }
}
