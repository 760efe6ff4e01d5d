//! Tests for the complex gamma-family backends.
//!
//! These tests verify the scalar gamma and digamma kernels against known
//! closed-form values and the functional equations that tie neighboring
//! arguments together.
//!
//! ## Test Organization
//!
//! 1. **Gamma values** - Factorials, half-integer values, reflection
//! 2. **Gamma recurrence** - gamma(z+1) = z * gamma(z) at complex points
//! 3. **Digamma values** - Known constants at small arguments
//! 4. **Digamma recurrence and reflection**

use approx::assert_relative_eq;
use num_complex::Complex64;
use std::f64::consts::PI;

use complot::math::gamma::{digamma, gamma};

/// Euler-Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

// ============================================================================
// Gamma Values
// ============================================================================

#[test]
fn gamma_matches_factorials() {
    for (n, expected) in [(1.0, 1.0), (2.0, 1.0), (3.0, 2.0), (5.0, 24.0), (7.0, 720.0)] {
        let value = gamma(c(n, 0.0));
        assert_relative_eq!(value.re, expected, max_relative = 1e-12);
        assert_relative_eq!(value.im, 0.0, epsilon = 1e-10 * expected);
    }
}

#[test]
fn gamma_at_half_integers() {
    // gamma(1/2) = sqrt(pi); gamma(-1/2) = -2 sqrt(pi) via reflection.
    let sqrt_pi = PI.sqrt();
    assert_relative_eq!(gamma(c(0.5, 0.0)).re, sqrt_pi, max_relative = 1e-12);
    assert_relative_eq!(gamma(c(-0.5, 0.0)).re, -2.0 * sqrt_pi, max_relative = 1e-11);
}

#[test]
fn gamma_poles_are_non_finite() {
    for pole in [0.0, -1.0, -2.0, -5.0] {
        assert!(!gamma(c(pole, 0.0)).is_finite());
    }
}

// ============================================================================
// Gamma Recurrence
// ============================================================================

#[test]
fn gamma_recurrence_holds_at_complex_points() {
    for z in [c(2.5, 1.5), c(0.7, -2.0), c(-1.3, 0.8)] {
        let lhs = gamma(z + 1.0);
        let rhs = z * gamma(z);
        assert_relative_eq!(lhs.re, rhs.re, max_relative = 1e-10);
        assert_relative_eq!(lhs.im, rhs.im, max_relative = 1e-10);
    }
}

// ============================================================================
// Digamma Values
// ============================================================================

#[test]
fn digamma_known_constants() {
    // psi(1) = -gamma, psi(2) = 1 - gamma, psi(1/2) = -gamma - 2 ln 2.
    assert_relative_eq!(digamma(c(1.0, 0.0)).re, -EULER_GAMMA, max_relative = 1e-12);
    assert_relative_eq!(digamma(c(2.0, 0.0)).re, 1.0 - EULER_GAMMA, max_relative = 1e-12);
    assert_relative_eq!(
        digamma(c(0.5, 0.0)).re,
        -EULER_GAMMA - 2.0 * 2.0_f64.ln(),
        max_relative = 1e-12
    );
    assert_relative_eq!(digamma(c(1.0, 0.0)).im, 0.0, epsilon = 1e-13);
}

// ============================================================================
// Digamma Recurrence and Reflection
// ============================================================================

#[test]
fn digamma_recurrence_holds_at_complex_points() {
    // psi(z+1) = psi(z) + 1/z, including through the reflection branch.
    for z in [c(3.2, 0.5), c(0.5, 1.0), c(-0.3, 0.2)] {
        let lhs = digamma(z + 1.0);
        let rhs = digamma(z) + z.inv();
        assert_relative_eq!(lhs.re, rhs.re, max_relative = 1e-10, epsilon = 1e-10);
        assert_relative_eq!(lhs.im, rhs.im, max_relative = 1e-10, epsilon = 1e-10);
    }
}

#[test]
fn digamma_poles_are_non_finite() {
    assert!(!digamma(c(0.0, 0.0)).is_finite());
    assert!(!digamma(c(-3.0, 0.0)).is_finite());
}
