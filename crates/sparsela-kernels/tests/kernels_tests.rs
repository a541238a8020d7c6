use sparsela_core::{Coo, Csc, Csr, Error};
use sparsela_kernels::{
    add, coo_from_dense, csc_from_dense, csr_from_dense, matmul, matvec, scalar_multiply,
    to_dense, transpose, Format, Matrix, SparseMatrix,
};

fn dense_a() -> Vec<Vec<f64>> {
    vec![vec![1.0, 0.0, 2.0], vec![0.0, 3.0, 0.0]]
}

#[test]
fn test_add_cancellation_yields_empty_coo() {
    let a = Coo::from_parts(2, 2, vec![0], vec![0], vec![1.0]).unwrap();
    let b = Coo::from_parts(2, 2, vec![0], vec![0], vec![-1.0]).unwrap();
    let c = add(&a, &b).unwrap();
    assert_eq!(c.format(), Format::Coo);
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.nnz(), 0);
    assert_eq!(c.as_coo().unwrap(), &Coo::from_parts(2, 2, vec![], vec![], vec![]).unwrap());
}

#[test]
fn test_add_shape_mismatch() {
    let a = csr_from_dense(&dense_a()).unwrap();
    let b = csr_from_dense(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let err = add(&a, &b).unwrap_err();
    assert_eq!(
        err,
        Error::ShapeMismatch {
            op: "add",
            lhs: (2, 3),
            rhs: (2, 2)
        }
    );
}

#[test]
fn test_matmul_shape_mismatch() {
    let a = coo_from_dense(&dense_a()).unwrap();
    let err = matmul(&a, &a).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { op: "matmul", .. }));
    assert!(err.to_string().contains("matmul"));
}

#[test]
fn test_scalar_multiply_rejects_nan() {
    let a = csc_from_dense(&dense_a()).unwrap();
    let err = scalar_multiply(&a, f64::NAN).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch(_)));
    assert!(scalar_multiply(&a, f64::INFINITY).is_ok());
}

#[test]
fn test_result_layouts() {
    let coo = coo_from_dense(&dense_a()).unwrap();
    let csr = csr_from_dense(&dense_a()).unwrap();
    let csc = csc_from_dense(&dense_a()).unwrap();

    assert_eq!(add(&csr, &csr).unwrap().format(), Format::Csr);
    assert_eq!(add(&csc, &csc).unwrap().format(), Format::Csc);
    assert_eq!(scalar_multiply(&coo, 2.0).unwrap().format(), Format::Coo);

    assert_eq!(transpose(&coo).format(), Format::Coo);
    assert_eq!(transpose(&csr).format(), Format::Csc);
    assert_eq!(transpose(&csc).format(), Format::Csr);

    let ct = transpose(&csr);
    assert_eq!(matmul(&csr, &ct).unwrap().format(), Format::Csr);
    assert_eq!(matmul(&csc, &ct).unwrap().format(), Format::Csc);
    assert_eq!(matmul(&coo, &ct).unwrap().format(), Format::Coo);
}

#[test]
fn test_mixed_format_operands() {
    let coo = coo_from_dense(&dense_a()).unwrap();
    let csr = csr_from_dense(&dense_a()).unwrap();
    let csc = csc_from_dense(&dense_a()).unwrap();
    let doubled = vec![vec![2.0, 0.0, 4.0], vec![0.0, 6.0, 0.0]];

    assert_eq!(add(&coo, &csr).unwrap().to_dense(), doubled);
    assert_eq!(add(&csr, &csc).unwrap().to_dense(), doubled);
    assert_eq!(add(&csc, &coo).unwrap().to_dense(), doubled);

    // A @ A^T = [[5,0],[0,9]] whatever the operand layouts
    let gram = vec![vec![5.0, 0.0], vec![0.0, 9.0]];
    let at_csc = transpose(&csr);
    let at_coo = transpose(&coo);
    assert_eq!(matmul(&coo, &at_csc).unwrap().to_dense(), gram);
    assert_eq!(matmul(&csr, &at_coo).unwrap().to_dense(), gram);
    assert_eq!(matmul(&csc, &at_coo).unwrap().to_dense(), gram);
}

#[test]
fn test_scalar_multiply_by_zero_asymmetry() {
    let coo = coo_from_dense(&dense_a()).unwrap();
    let csr = csr_from_dense(&dense_a()).unwrap();
    let z = scalar_multiply(&coo, 0.0).unwrap();
    assert_eq!(z.nnz(), coo.nnz());
    let z = scalar_multiply(&csr, 0.0).unwrap();
    assert_eq!(z.nnz(), 0);
    assert_eq!(z.as_csr().unwrap().indptr(), &[0, 0, 0]);
    assert_eq!(to_dense(&z), vec![vec![0.0; 3]; 2]);
}

#[test]
fn test_sparse_matrix_methods_chain() {
    let m: SparseMatrix = csr_from_dense(&dense_a()).unwrap().into();
    let twice = m.add(&m).unwrap();
    let scaled = m.scalar_multiply(2.0).unwrap();
    assert_eq!(twice.to_dense(), scaled.to_dense());

    let back = m.transpose().transpose();
    assert_eq!(back.format(), Format::Csr);
    assert_eq!(back, m);

    let g = m.matmul(&m.transpose()).unwrap();
    assert_eq!(g.as_csr().unwrap().data(), &[5.0, 9.0]);
    assert!(g.as_csc().is_none());
}

#[test]
fn test_cross_format_accessors() {
    let csr = csr_from_dense(&dense_a()).unwrap();
    let csc: Csc<f64, usize> = csr.to_csc();
    let coo: Coo<f64, usize> = csc.to_coo();
    let csr2: Csr<f64, usize> = coo.to_csr();
    assert_eq!(csr2, csr);
    assert_eq!(csc.to_csr(), csr);
    assert_eq!(coo.to_dense(), dense_a());
}

#[test]
fn test_matvec_contract() {
    let x = [10.0, 20.0, 30.0];
    for m in [
        SparseMatrix::from(coo_from_dense(&dense_a()).unwrap()),
        SparseMatrix::from(csr_from_dense(&dense_a()).unwrap()),
        SparseMatrix::from(csc_from_dense(&dense_a()).unwrap()),
    ] {
        assert_eq!(matvec(&m, &x).unwrap(), vec![70.0, 60.0]);
        let err = matvec(&m, &x[..2]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { op: "matvec", .. }));
    }
}

#[test]
fn test_format_display() {
    assert_eq!(Format::Coo.to_string(), "coo");
    assert_eq!(Format::Csr.to_string(), "csr");
    assert_eq!(Format::Csc.to_string(), "csc");
}
