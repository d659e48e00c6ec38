//! Integration tests exercising the full public contract, end to end,
//! the way the calculator front-end drives it.

use spmat::{render_dense, render_sparse, MatrixError, SparseMatrix, EPSILON};

fn m1() -> SparseMatrix {
    SparseMatrix::from_triplets(2, 2, &[(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)])
        .unwrap()
}

fn m2() -> SparseMatrix {
    SparseMatrix::from_triplets(2, 2, &[(0, 0, 5.0), (0, 1, 6.0), (1, 0, 7.0), (1, 1, 8.0)])
        .unwrap()
}

fn assert_cells(matrix: &SparseMatrix, expected: &[&[f64]]) {
    assert_eq!(matrix.rows(), expected.len());
    for (row, expected_row) in expected.iter().enumerate() {
        assert_eq!(matrix.cols(), expected_row.len());
        for (col, &want) in expected_row.iter().enumerate() {
            let got = matrix.get(row, col).unwrap();
            assert!(
                (got - want).abs() < EPSILON,
                "cell ({row}, {col}): got {got}, want {want}"
            );
        }
    }
}

#[test]
fn addition_of_two_dense_2x2_matrices() {
    let sum = m1().add(&m2()).unwrap();
    assert_cells(&sum, &[&[6.0, 8.0], &[10.0, 12.0]]);
}

#[test]
fn multiplication_of_two_dense_2x2_matrices() {
    let product = m1().multiply(&m2()).unwrap();
    assert_cells(&product, &[&[19.0, 22.0], &[43.0, 50.0]]);
}

#[test]
fn subtraction_matches_cellwise_difference() {
    let a = m1();
    let b = m2();
    let diff = a.subtract(&b).unwrap();

    for row in 0..2 {
        for col in 0..2 {
            let want = a.get(row, col).unwrap() - b.get(row, col).unwrap();
            assert_eq!(diff.get(row, col).unwrap(), want);
        }
    }
}

#[test]
fn determinant_of_m1_is_minus_two() {
    assert_eq!(m1().determinant().unwrap(), -2.0);
}

#[test]
fn transpose_of_m1() {
    let t = m1().transpose().unwrap();
    assert_cells(&t, &[&[1.0, 3.0], &[2.0, 4.0]]);
}

#[test]
fn inserting_zero_into_empty_matrix_is_a_noop() {
    let mut m = SparseMatrix::new(4, 4).unwrap();
    m.insert(0, 0, 0.0).unwrap();

    assert_eq!(m.count_non_zero(), 0);
    assert_eq!(render_dense(&m), "Empty matrix (all zeros)\n");
}

#[test]
fn sub_threshold_insert_stores_nothing() {
    let mut m = SparseMatrix::new(2, 2).unwrap();
    m.insert(0, 1, 5e-11).unwrap();

    assert_eq!(m.get(0, 1).unwrap(), 0.0);
    assert_eq!(m.count_non_zero(), 0);
}

#[test]
fn determinant_of_4x4_is_unsupported() {
    let m = SparseMatrix::from_triplets(4, 4, &[(0, 0, 1.0), (3, 3, 2.0)]).unwrap();

    assert_eq!(m.determinant(), Err(MatrixError::UnsupportedSize { order: 4 }));
}

#[test]
fn inverse_of_singular_matrix_fails() {
    let m = SparseMatrix::from_triplets(
        2,
        2,
        &[(0, 0, 1.0), (0, 1, 2.0), (1, 0, 2.0), (1, 1, 4.0)],
    )
    .unwrap();

    assert!(matches!(
        m.inverse(),
        Err(MatrixError::SingularMatrix { .. })
    ));
}

#[test]
fn mismatched_addition_fails_and_leaves_operands_unmodified() {
    let a = m1();
    let b = SparseMatrix::from_triplets(3, 2, &[(2, 1, 1.0)]).unwrap();

    assert!(matches!(
        a.add(&b),
        Err(MatrixError::DimensionMismatch { op: "add", .. })
    ));
    assert_cells(&a, &[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(b.get(2, 1).unwrap(), 1.0);
    assert_eq!(b.count_non_zero(), 1);
}

#[test]
fn inverse_times_original_is_identity_for_2x2_and_3x3() {
    let two = m1();
    let three = SparseMatrix::from_triplets(
        3,
        3,
        &[
            (0, 0, 3.0),
            (0, 1, 0.0),
            (0, 2, 2.0),
            (1, 0, 2.0),
            (1, 2, -2.0),
            (2, 1, 1.0),
            (2, 2, 1.0),
        ],
    )
    .unwrap();

    for m in [two, three] {
        let inv = m.inverse().unwrap();
        let product = m.multiply(&inv).unwrap();
        let order = m.rows();
        for row in 0..order {
            for col in 0..order {
                let want = if row == col { 1.0 } else { 0.0 };
                let got = product.get(row, col).unwrap();
                assert!(
                    (got - want).abs() < 1e-9,
                    "order {order}, cell ({row}, {col}): {got}"
                );
            }
        }
    }
}

#[test]
fn scalar_roundtrip_multiply_then_divide() {
    let m = m1();
    let back = m.scalar_multiply(2.5).unwrap().scalar_divide(2.5).unwrap();

    assert_cells(&back, &[&[1.0, 2.0], &[3.0, 4.0]]);
}

#[test]
fn ordering_invariant_survives_arbitrary_insert_sequences() {
    let mut m = SparseMatrix::new(10, 10).unwrap();
    let cells = [
        (9, 9, 1.0),
        (0, 5, 2.0),
        (4, 4, 3.0),
        (0, 1, 4.0),
        (4, 0, 5.0),
        (2, 7, 6.0),
    ];
    for (row, col, value) in cells {
        m.insert(row, col, value).unwrap();
    }
    m.insert(4, 4, 0.0).unwrap();
    m.insert(2, 7, 0.0).unwrap();

    let seen: Vec<(usize, usize)> = m.iter().map(|(r, c, _)| (r, c)).collect();
    let mut sorted = seen.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(seen, sorted);
    assert_eq!(m.count_non_zero(), 4);
}

#[test]
fn sparse_rendering_matches_storage_order() {
    let m = SparseMatrix::from_triplets(3, 3, &[(2, 1, 7.0), (0, 2, 3.0), (0, 0, 1.0)]).unwrap();

    assert_eq!(
        render_sparse(&m),
        "0, 0, 1.00\n0, 2, 3.00\n2, 1, 7.00\nTotal non-zero elements: 3\n"
    );
}
