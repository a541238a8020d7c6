use sparsela_core::{Csr, Error};

#[test]
fn from_parts_ok() {
    let nrows = 2usize;
    let ncols = 3usize;
    let indptr = vec![0usize, 2, 3];
    let indices = vec![0usize, 2, 1];
    let data = vec![1.0f64, 2.0, 3.0];
    let csr = Csr::from_parts(nrows, ncols, indptr, indices, data).unwrap();
    assert_eq!(csr.nnz(), 3);
    assert_eq!(csr.shape(), (2, 3));
    let (cols, vals) = csr.row_segment(0);
    assert_eq!(cols, &[0, 2]);
    assert_eq!(vals, &[1.0, 2.0]);
}

#[test]
fn indptr_length_must_be_nrows_plus_one() {
    let err = Csr::from_parts(2, 3, vec![0usize, 1], vec![0usize], vec![1.0f64]).unwrap_err();
    assert_eq!(err, Error::IndptrLength { expected: 3, got: 2 });
}

#[test]
fn indptr_first_must_be_zero() {
    let nrows = 1usize;
    let ncols = 3usize;
    let indptr = vec![1usize, 1]; // first element not zero, but still length 2 and last == 1 == nnz
    let indices = vec![0usize];
    let data = vec![1.0f64];
    let err = Csr::from_parts(nrows, ncols, indptr, indices, data).unwrap_err();
    println!("Error: {:?}", err);
    assert!(err.to_string().contains("must be 0"));
}

#[test]
fn nnz_and_lengths_must_match() {
    let nrows = 1usize;
    let ncols = 3usize;
    // indices/data length mismatch
    let indptr = vec![0usize, 2];
    let indices = vec![0usize, 1];
    let data = vec![1.0f64];
    let err = Csr::from_parts(nrows, ncols, indptr, indices, data).unwrap_err();
    assert!(err.to_string().contains("indices and data"));
}

#[test]
fn last_element_must_equal_nnz() {
    let nrows = 1usize;
    let ncols = 3usize;
    let indptr = vec![0usize, 1];
    let indices = vec![0usize, 1];
    let data = vec![1.0f64, 2.0];
    let err = Csr::from_parts(nrows, ncols, indptr, indices, data).unwrap_err();
    assert!(err.to_string().contains("last element"));
    assert_eq!(err, Error::IndptrTerminal { last: 1, nnz: 2 });
}

#[test]
fn indptr_non_decreasing_per_row() {
    let nrows = 2usize;
    let ncols = 3usize;
    let indptr = vec![0usize, 2, 1]; // decreasing at the last step; length 3, last element 1 == nnz
    let indices = vec![0usize];
    let data = vec![1.0f64];
    let err = Csr::from_parts(nrows, ncols, indptr, indices, data).unwrap_err();
    println!("Error: {:?}", err);
    assert!(err.to_string().contains("must be non-decreasing"));
    assert!(matches!(err, Error::IndptrNotMonotonic { position: 1, prev: 2, next: 1 }));
}

#[test]
fn unsorted_columns_accepted_at_raw_construction() {
    let indptr = vec![0usize, 2];
    let indices = vec![2usize, 0];
    let data = vec![1.0f64, 2.0];
    let csr = Csr::from_parts(1, 3, indptr, indices, data).unwrap();
    assert_eq!(csr.indices(), &[2, 0]);
}

#[test]
fn column_index_out_of_bounds() {
    let nrows = 1usize;
    let ncols = 3usize;
    let indptr = vec![0usize, 1];
    let indices = vec![3usize]; // out of bounds (valid: 0..=2)
    let data = vec![1.0f64];
    let err = Csr::from_parts(nrows, ncols, indptr, indices, data).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn empty_has_zero_pointer_array() {
    let csr = Csr::empty(2, 2);
    assert_eq!(csr.indptr(), &[0, 0, 0]);
    assert_eq!(csr.nnz(), 0);
}
