//! Process-wide default strategy. Kept in its own test binary so no other
//! test observes the toggle.

use genmat_core::{ExecPolicy, Matrix, Strategy, default_policy, is_parallel, set_parallel};

#[test]
fn toggle_changes_strategy_not_results() {
    let a = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let b = Matrix::from_vec(2, 3, vec![6, 5, 4, 3, 2, 1]).unwrap();

    assert!(!is_parallel());
    assert_eq!(default_policy(), ExecPolicy::sequential());
    let seq_sum = a.add(&a).unwrap();
    let seq_prod = a.matmul(&b).unwrap();

    set_parallel(true);
    assert!(is_parallel());
    assert_eq!(default_policy().strategy(), Strategy::Parallel);
    assert_eq!(a.add(&a).unwrap(), seq_sum);
    assert_eq!(a.matmul(&b).unwrap(), seq_prod);

    // Setting the same mode twice is harmless.
    set_parallel(true);
    assert!(is_parallel());

    set_parallel(false);
    assert!(!is_parallel());
    assert_eq!(a.matmul(&b).unwrap().as_slice(), &[12, 9, 6, 30, 23, 16, 48, 37, 26]);
}
