//! Tests for the vectorization shim.
//!
//! These tests verify the shape-preserving element-wise map across ranks
//! and the sentinel-substitution policy of the fallible variant.
//!
//! ## Test Organization
//!
//! 1. **Shape and values** - Ranks 0, 1, and 2
//! 2. **Failure substitution** - Errors become the sentinel, element-wise

use ndarray::{arr0, array, ArrayD, IxDyn};
use num_complex::Complex64;

use complot::prelude::*;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn square(z: Complex64) -> Complex64 {
    z * z
}

// ============================================================================
// Shape and Values
// ============================================================================

#[test]
fn rank_0_through_2_preserve_shape_and_values() {
    let scalar = arr0(c(1.0, 2.0));
    let out = map_grid(&scalar, square);
    assert_eq!(out.shape(), scalar.shape());
    assert_eq!(out[()], square(c(1.0, 2.0)));

    let vector = array![c(0.0, 0.0), c(1.0, -1.0), c(2.5, 0.5)];
    let out = map_grid(&vector, square);
    assert_eq!(out.shape(), vector.shape());
    for (o, &v) in out.iter().zip(vector.iter()) {
        assert_eq!(*o, square(v));
    }

    let matrix = array![[c(1.0, 0.0), c(0.0, 1.0)], [c(-1.0, 0.0), c(3.0, 4.0)]];
    let out = map_grid(&matrix, square);
    assert_eq!(out.shape(), matrix.shape());
    for (o, &v) in out.iter().zip(matrix.iter()) {
        assert_eq!(*o, square(v));
    }
}

#[test]
fn dynamic_rank_arrays_work_too() {
    let input = ArrayD::from_elem(IxDyn(&[2, 1, 3]), c(0.5, 0.5));
    let out = map_grid(&input, square);
    assert_eq!(out.shape(), input.shape());
}

// ============================================================================
// Failure Substitution
// ============================================================================

#[test]
fn errors_become_the_sentinel_per_element() {
    let input = array![c(1.0, 0.0), c(-1.0, 0.0), c(2.0, 0.0)];
    let out = try_map_grid(&input, |z| {
        if z.re < 0.0 {
            Err(EvalError::NonFiniteInput)
        } else {
            Ok(z)
        }
    });

    assert_eq!(out.shape(), input.shape());
    assert_eq!(out[0], c(1.0, 0.0));
    assert!(is_undefined(out[1]));
    assert_eq!(out[2], c(2.0, 0.0));
}
