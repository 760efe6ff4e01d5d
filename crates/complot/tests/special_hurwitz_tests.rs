//! Tests for the array-level Hurwitz zeta entry points.
//!
//! These tests verify shape preservation across array ranks, the identity
//! between the Riemann wrapper and the fixed-offset entry point, and the
//! per-element failure isolation policy.
//!
//! ## Test Organization
//!
//! 1. **Shape preservation** - Ranks 0 through 3
//! 2. **Identity** - zeta(z) = hurwitz_zeta(z, 1)
//! 3. **Failure isolation** - One bad point never poisons its neighbors
//! 4. **Offset sweep** - The second entry point

use approx::assert_relative_eq;
use ndarray::{array, ArrayD, IxDyn};
use num_complex::Complex64;

use complot::prelude::*;

const ONE: Complex64 = Complex64::new(1.0, 0.0);

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

// ============================================================================
// Shape Preservation
// ============================================================================

#[test]
fn output_shape_equals_input_shape_for_ranks_0_to_3() {
    let shapes: [&[usize]; 4] = [&[], &[5], &[2, 3], &[2, 2, 2]];
    for shape in shapes {
        let input = ArrayD::from_elem(IxDyn(shape), c(2.0, 0.5));
        let output = hurwitz_zeta(&input, ONE);
        assert_eq!(output.shape(), input.shape());
        for value in output.iter() {
            assert!(!is_undefined(*value));
        }
    }
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn zeta_is_hurwitz_zeta_with_unit_offset() {
    let grid = array![
        [c(2.0, 0.0), c(3.0, 1.0)],
        [c(0.5, 14.0), c(-1.5, 2.0)],
        [c(1.0, 0.0), c(4.0, -2.0)],
    ];
    let via_zeta = zeta(&grid);
    let via_hurwitz = hurwitz_zeta(&grid, ONE);
    for (a, b) in via_zeta.iter().zip(via_hurwitz.iter()) {
        if is_undefined(*a) {
            assert!(is_undefined(*b));
        } else {
            assert_eq!(a, b);
        }
    }
}

// ============================================================================
// Failure Isolation
// ============================================================================

#[test]
fn pole_poisons_only_its_own_element() {
    // The middle element sits on the s = 1 pole; its neighbors must come
    // back finite.
    let grid = array![[c(0.5, 0.0), c(1.0, 0.0), c(2.0, 0.0)]];
    let out = hurwitz_zeta(&grid, ONE);

    assert!(!is_undefined(out[[0, 0]]));
    assert!(is_undefined(out[[0, 1]]));
    assert!(!is_undefined(out[[0, 2]]));
    assert_relative_eq!(
        out[[0, 2]].re,
        std::f64::consts::PI.powi(2) / 6.0,
        max_relative = 1e-12
    );
}

// ============================================================================
// Offset Sweep
// ============================================================================

#[test]
fn offset_sweep_isolates_singular_offsets() {
    let offsets = array![c(1.0, 0.0), c(2.0, 0.0), c(-1.0, 0.0), c(0.5, 0.0)];
    let out = hurwitz_zeta_a(c(3.0, 0.0), &offsets);

    assert_eq!(out.shape(), offsets.shape());
    assert!(!is_undefined(out[0]));
    assert!(!is_undefined(out[1]));
    assert!(is_undefined(out[2]));
    assert!(!is_undefined(out[3]));

    // zeta(3, 2) = zeta(3) - 1.
    assert_relative_eq!(out[1].re, out[0].re - 1.0, max_relative = 1e-11);
}
