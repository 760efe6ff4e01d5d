//! Truncated Lambert-series and Euler-product summators.
//!
//! ## Purpose
//!
//! This module provides the four truncated power-series accumulators used
//! for the unit-disk figures: two Lambert-style series, a theta-style
//! square-exponent series, and the Euler product, plus the totient-series
//! closed form.
//!
//! ## Design notes
//!
//! * **Running powers**: Each iteration multiplies a carried power of z
//!   instead of re-exponentiating; the square-exponent series steps through
//!   odd powers (z^((k+1)^2) = z^(k^2) * z^(2k+1)).
//! * **Masking last**: Divergence masking is a separate post-processing pass
//!   (see `primitives::sentinel`), applied after summation so the series
//!   arithmetic and the cutoff policy stay independently testable. The
//!   Euler product masks on its running power after truncation; the series
//!   mask on the input grid. The boundary condition is closed: |z| <= 1 is
//!   kept.
//! * **Term counts**: Fixed ad hoc defaults chosen for visual adequacy, not
//!   an accuracy target; every summator takes the count as a parameter.
//!
//! ## Invariants
//!
//! * Output shape equals input shape for any array rank.
//! * For |z| > 1 every output element is the undefined sentinel regardless
//!   of the term count.

use ndarray::{Array, Dimension, Zip};
use num_complex::Complex64;

use crate::primitives::sentinel::mask_outside_unit_disk;

const ONE: Complex64 = Complex64::new(1.0, 0.0);

// ============================================================================
// Default Term Counts
// ============================================================================

/// Default term count for [`lambert_1`].
pub const LAMBERT_1_TERMS: usize = 100;

/// Default term count for [`lambert_von_mangoldt`].
pub const VON_MANGOLDT_TERMS: usize = 1000;

/// Default term count for [`lambert_liouville`].
pub const LIOUVILLE_TERMS: usize = 30;

/// Default factor count for [`euler_function`].
pub const EULER_TERMS: usize = 1000;

// ============================================================================
// Summators
// ============================================================================

/// Truncated Lambert series sum_{k=1}^{terms} z^k / (1 - z^k), the
/// generating function of the divisor-count sequence.
#[must_use]
pub fn lambert_1<D: Dimension>(z: &Array<Complex64, D>, terms: usize) -> Array<Complex64, D> {
    let mut sum = Array::zeros(z.raw_dim());
    let mut zn = z.clone();
    for _ in 0..terms {
        Zip::from(&mut sum).and(&zn).for_each(|s, &p| *s += p / (ONE - p));
        Zip::from(&mut zn).and(z).for_each(|p, &v| *p *= v);
    }
    mask_outside_unit_disk(&mut sum, z);
    sum
}

/// Truncated logarithmically weighted series sum_{k=1}^{terms} ln(k) * z^k.
#[must_use]
pub fn lambert_von_mangoldt<D: Dimension>(
    z: &Array<Complex64, D>,
    terms: usize,
) -> Array<Complex64, D> {
    let mut sum = Array::zeros(z.raw_dim());
    let mut zn = z.clone();
    for k in 1..=terms {
        let weight = (k as f64).ln();
        Zip::from(&mut sum).and(&zn).for_each(|s, &p| *s += weight * p);
        Zip::from(&mut zn).and(z).for_each(|p, &v| *p *= v);
    }
    mask_outside_unit_disk(&mut sum, z);
    sum
}

/// Truncated square-exponent series sum_{k=0}^{terms-1} z^(k^2), the
/// Liouville-weighted Lambert series resummed.
#[must_use]
pub fn lambert_liouville<D: Dimension>(
    z: &Array<Complex64, D>,
    terms: usize,
) -> Array<Complex64, D> {
    let mut sum = Array::zeros(z.raw_dim());
    let mut power = Array::from_elem(z.raw_dim(), ONE);
    let mut odd = z.clone();
    let squared = z.mapv(|v| v * v);
    for _ in 0..terms {
        Zip::from(&mut sum).and(&power).for_each(|s, &p| *s += p);
        Zip::from(&mut power).and(&odd).for_each(|p, &o| *p *= o);
        Zip::from(&mut odd).and(&squared).for_each(|o, &q| *o *= q);
    }
    mask_outside_unit_disk(&mut sum, z);
    sum
}

/// Truncated Euler product prod_{k=1}^{terms} (1 - z^k).
///
/// Masking keys on the running power after truncation: elements where
/// |z^(terms+1)| > 1 become the undefined sentinel.
#[must_use]
pub fn euler_function<D: Dimension>(z: &Array<Complex64, D>, terms: usize) -> Array<Complex64, D> {
    let mut out = Array::from_elem(z.raw_dim(), ONE);
    let mut zk = z.clone();
    for _ in 0..terms {
        Zip::from(&mut out).and(&zk).for_each(|o, &p| *o *= ONE - p);
        Zip::from(&mut zk).and(z).for_each(|p, &v| *p *= v);
    }
    mask_outside_unit_disk(&mut out, &zk);
    out
}

/// Closed form z / (1 - z)^2 of the totient-weighted Lambert series.
#[inline]
#[must_use]
pub fn lambert_phi(z: Complex64) -> Complex64 {
    let denom = ONE - z;
    z / (denom * denom)
}
