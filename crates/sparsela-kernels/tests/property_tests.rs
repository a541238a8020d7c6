//! Property-based tests for the storage layouts and the LU solver
//!
//! Dense inputs are drawn so every entry is either exactly zero or far above
//! the zero tolerance, which makes the layouts interchangeable.

use proptest::prelude::*;
use sparsela_core::{Coo, ZERO_TOL};
use sparsela_kernels::{
    add, coo_from_dense, coo_to_csc_f64, coo_to_csr_f64, coo_to_dense, csc_from_dense,
    csr_from_dense, csr_to_dense, lu_decomposition, matmul, matvec, scalar_multiply,
    solve_slae_lu, Matrix, SparseMatrix,
};

fn entry() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => Just(0.0),
        1 => 1.0..100.0f64,
        1 => -100.0..-1.0f64,
    ]
}

fn dense_strategy(max_dim: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(|(r, c)| {
        prop::collection::vec(prop::collection::vec(entry(), c), r)
    })
}

fn all_layouts(d: &[Vec<f64>]) -> Vec<SparseMatrix> {
    vec![
        coo_from_dense(d).unwrap().into(),
        csr_from_dense(d).unwrap().into(),
        csc_from_dense(d).unwrap().into(),
    ]
}

fn identity(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

/// Triplets with many repeated coordinates in a small grid
fn duplicate_triplets() -> impl Strategy<Value = (Vec<(usize, usize)>, Vec<f64>)> {
    prop::collection::vec((0..3usize, 0..3usize), 0..24).prop_flat_map(|idx| {
        let len = idx.len();
        (Just(idx), prop::collection::vec(-10.0..10.0f64, len))
    })
}

fn diagonally_dominant() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>)> {
    (1..6usize).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(-1.0..1.0f64, n), n),
            prop::collection::vec(-10.0..10.0f64, n),
        )
            .prop_map(move |(mut d, b)| {
                for (i, row) in d.iter_mut().enumerate() {
                    row[i] = n as f64 + 1.0 + row[i].abs();
                }
                (d, b)
            })
    })
}

proptest! {
    #[test]
    fn prop_dense_round_trip(d in dense_strategy(6)) {
        for m in all_layouts(&d) {
            prop_assert_eq!(m.to_dense(), d.clone());
        }
    }

    #[test]
    fn prop_add_self_equals_scale_two(d in dense_strategy(6)) {
        for m in all_layouts(&d) {
            let twice = add(&m, &m).unwrap();
            let scaled = scalar_multiply(&m, 2.0).unwrap();
            prop_assert_eq!(twice.format(), m.format());
            prop_assert_eq!(twice.to_dense(), scaled.to_dense());
        }
    }

    #[test]
    fn prop_transpose_involution(d in dense_strategy(6)) {
        for m in all_layouts(&d) {
            let t = m.transpose();
            prop_assert_eq!(t.shape(), (m.shape().1, m.shape().0));
            prop_assert_eq!(t.transpose().to_dense(), m.to_dense());
        }
    }

    #[test]
    fn prop_identity_matmul(d in dense_strategy(6)) {
        let n = d[0].len();
        let eye = all_layouts(&identity(n));
        for m in all_layouts(&d) {
            for i in &eye {
                prop_assert_eq!(matmul(&m, i).unwrap().to_dense(), d.clone());
            }
        }
    }

    #[test]
    fn prop_duplicates_accumulate((idx, vals) in duplicate_triplets()) {
        let row = idx.iter().map(|p| p.0).collect();
        let col = idx.iter().map(|p| p.1).collect();
        let coo = Coo::from_parts(3, 3, row, col, vals).unwrap();
        let summed = coo_to_dense(&coo);

        let csr = coo_to_csr_f64(&coo);
        for w in csr.indptr().windows(2) {
            let seg = &csr.indices()[w[0]..w[1]];
            prop_assert!(seg.windows(2).all(|p| p[0] < p[1]));
        }
        let csc = coo_to_csc_f64(&coo);
        for w in csc.indptr().windows(2) {
            let seg = &csc.indices()[w[0]..w[1]];
            prop_assert!(seg.windows(2).all(|p| p[0] < p[1]));
        }

        let from_csr = csr_to_dense(&csr);
        let from_csc = csc.to_dense();
        for i in 0..3 {
            for j in 0..3 {
                let expect = if summed[i][j].abs() > ZERO_TOL { summed[i][j] } else { 0.0 };
                prop_assert_eq!(from_csr[i][j], expect);
                prop_assert_eq!(from_csc[i][j], expect);
            }
        }
        prop_assert!(csr.data().iter().all(|v| v.abs() > ZERO_TOL));
    }

    #[test]
    fn prop_lu_reconstructs_and_solves((d, b) in diagonally_dominant()) {
        let a = csc_from_dense(&d).unwrap();
        let (l, u) = lu_decomposition(&a).unwrap();
        let ld = l.to_dense();
        for (i, row) in ld.iter().enumerate() {
            prop_assert_eq!(row[i], 1.0);
        }
        let lu = matmul(&l, &u).unwrap().to_dense();
        for (r, e) in lu.iter().zip(&d) {
            for (x, y) in r.iter().zip(e) {
                prop_assert!((x - y).abs() < 1e-9);
            }
        }

        let x = solve_slae_lu(&a, &b).unwrap().unwrap();
        let ax = matvec(&a, &x).unwrap();
        for (l, r) in ax.iter().zip(&b) {
            prop_assert!((l - r).abs() < 1e-9);
        }
    }
}
