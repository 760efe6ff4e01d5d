//! Complex gamma-family backends.
//!
//! ## Purpose
//!
//! This module provides scalar gamma and digamma functions for complex
//! arguments. They stand in for the special-function library the plotting
//! layer samples from, at double precision.
//!
//! ## Design notes
//!
//! * **Lanczos**: `gamma` uses the g = 7, 9-coefficient Lanczos
//!   approximation, with the reflection formula for Re(z) < 1/2.
//! * **Asymptotic digamma**: `digamma` shifts the argument up with the
//!   recurrence psi(z) = psi(z+1) - 1/z until the Bernoulli asymptotic
//!   series applies, and reflects for Re(z) < 1/2.
//! * **Poles**: Non-positive integers produce non-finite values through the
//!   reflection divisions; no error path is needed at this layer.
//!
//! ## Invariants
//!
//! * Accuracy is on the order of 1e-13 relative over the plotting ranges,
//!   away from poles.
//!
//! ## Non-goals
//!
//! * No arbitrary-precision arithmetic; these are f64 kernels.

use num_complex::Complex64;
use num_traits::Zero;
use std::f64::consts::PI;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Square root of 2*pi.
const SQRT_2PI: f64 = 2.506_628_274_631_000_7;

/// Lanczos shift parameter.
const LANCZOS_G: f64 = 7.0;

/// Lanczos coefficients for g = 7, n = 9.
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Coefficients B_2j / (2j) of the digamma asymptotic tail, j = 1..=7.
const DIGAMMA_TAIL: [f64; 7] = [
    1.0 / 12.0,
    -1.0 / 120.0,
    1.0 / 252.0,
    -1.0 / 240.0,
    1.0 / 132.0,
    -691.0 / 32_760.0,
    1.0 / 12.0,
];

/// Real-part threshold above which the digamma asymptotic series is used.
const DIGAMMA_SHIFT_LIMIT: f64 = 8.0;

// ============================================================================
// Gamma
// ============================================================================

/// The gamma function for a complex argument.
///
/// Values at the poles (non-positive integers) are non-finite.
#[must_use]
pub fn gamma(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        // Reflection: gamma(z) = pi / (sin(pi z) * gamma(1 - z))
        let sine = (PI * z).sin();
        return PI / (sine * gamma(1.0 - z));
    }

    let z = z - 1.0;
    let mut acc = Complex64::new(LANCZOS_COEFFS[0], 0.0);
    for (i, &coeff) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        acc += coeff / (z + i as f64);
    }
    let t = z + LANCZOS_G + 0.5;
    SQRT_2PI * t.powc(z + 0.5) * (-t).exp() * acc
}

// ============================================================================
// Digamma
// ============================================================================

/// The digamma function psi(z) = d/dz ln gamma(z) for a complex argument.
#[must_use]
pub fn digamma(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        // Reflection: psi(z) = psi(1 - z) - pi * cot(pi z)
        let piz = PI * z;
        return digamma(1.0 - z) - PI * piz.cos() / piz.sin();
    }

    // Shift upward until the asymptotic series applies.
    let mut shift = Complex64::zero();
    let mut w = z;
    while w.re < DIGAMMA_SHIFT_LIMIT {
        shift -= w.inv();
        w += 1.0;
    }

    // psi(w) ~ ln w - 1/(2w) - sum_j B_2j / (2j * w^(2j))
    let inv2 = (w * w).inv();
    let mut tail = Complex64::zero();
    let mut power = inv2;
    for &coeff in &DIGAMMA_TAIL {
        tail += coeff * power;
        power *= inv2;
    }

    shift + w.ln() - (2.0 * w).inv() - tail
}
