//! The `core` feature exposes the engine through the facade.
#![cfg(feature = "core")]

use genmat::prelude::*;

#[test]
fn prelude_exposes_engine() {
    let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    let policy = ExecPolicy::parallel();
    assert_eq!(a.add_with(&a, &policy).unwrap().render(), "2\t4\n6\t8\n");
    assert_eq!(genmat::core::Matrix::<i32>::default().render(), "");
}
