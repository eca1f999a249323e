//! Property tests for the matrix engine.

use genmat_core::{Complex, CoreError, ExecPolicy, Matrix};
use proptest::prelude::*;

fn int_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    prop::collection::vec(-1_000i64..1_000, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("length matches"))
}

fn same_shape_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (1..=8usize, 1..=8usize).prop_flat_map(|(r, c)| (int_matrix(r, c), int_matrix(r, c)))
}

fn chained_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (1..=7usize, 1..=7usize, 1..=7usize)
        .prop_flat_map(|(m, k, n)| (int_matrix(m, k), int_matrix(k, n)))
}

fn complex_matrix() -> impl Strategy<Value = Matrix<Complex<f64>>> {
    (1..=6usize, 1..=6usize).prop_flat_map(|(r, c)| {
        prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), r * c).prop_map(move |v| {
            let data = v.into_iter().map(|(re, im)| Complex::new(re, im)).collect();
            Matrix::from_vec(r, c, data).expect("length matches")
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_then_sub_restores_left((a, b) in same_shape_pair()) {
        let sum = a.add_with(&b, &ExecPolicy::sequential()).unwrap();
        prop_assert_eq!(sum.sub(&b).unwrap(), a);
    }

    #[test]
    fn strategy_never_changes_add((a, b) in same_shape_pair(), min_rows in 1..4usize) {
        let seq = a.add_with(&b, &ExecPolicy::sequential()).unwrap();
        let par = a
            .add_with(&b, &ExecPolicy::parallel().with_min_rows_per_task(min_rows))
            .unwrap();
        prop_assert_eq!(seq, par);
    }

    #[test]
    fn strategy_never_changes_matmul((a, b) in chained_pair()) {
        let seq = a.matmul_with(&b, &ExecPolicy::sequential()).unwrap();
        let par = a.matmul_with(&b, &ExecPolicy::parallel()).unwrap();
        prop_assert_eq!(seq.shape(), (a.rows(), b.cols()));
        prop_assert_eq!(seq, par);
    }

    #[test]
    fn conjugate_transpose_is_involution(z in complex_matrix()) {
        let zh = z.transpose();
        prop_assert_eq!(zh.shape(), (z.cols(), z.rows()));
        prop_assert_eq!(zh.transpose(), z);
    }

    #[test]
    fn trace_rejects_non_square(rows in 1..=9usize, cols in 1..=9usize) {
        prop_assume!(rows != cols);
        let m = Matrix::<i32>::zeros(rows, cols).unwrap();
        prop_assert_eq!(m.trace(), Err(CoreError::NotSquare { rows, cols }));
    }

    #[test]
    fn half_empty_shapes_rejected(n in 1..=64usize) {
        let zero_rows = Matrix::<f32>::zeros(0, n);
        let zero_cols = Matrix::<f32>::zeros(n, 0);
        prop_assert!(matches!(zero_rows, Err(CoreError::InvalidShape { .. })), "0x{} accepted", n);
        prop_assert!(matches!(zero_cols, Err(CoreError::InvalidShape { .. })), "{}x0 accepted", n);
    }
}

#[test]
fn empty_shape_accepted() {
    let m = Matrix::<f32>::zeros(0, 0).unwrap();
    assert!(m.is_empty());
    assert_eq!(m.iter().count(), 0);
}

#[test]
fn worked_example() {
    let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();

    for policy in [ExecPolicy::sequential(), ExecPolicy::parallel()] {
        assert_eq!(
            a.add_with(&b, &policy).unwrap(),
            Matrix::from_vec(2, 2, vec![6, 8, 10, 12]).unwrap()
        );
        assert_eq!(
            a.matmul_with(&b, &policy).unwrap(),
            Matrix::from_vec(2, 2, vec![19, 22, 43, 50]).unwrap()
        );
    }
    assert_eq!(a.trace().unwrap(), 5);
    assert_eq!(a.transpose(), Matrix::from_vec(2, 2, vec![1, 3, 2, 4]).unwrap());
    assert_eq!(a.render(), "1\t2\n3\t4\n");
    assert!(matches!(a.get(2, 0), Err(CoreError::OutOfRange { .. })));
}
