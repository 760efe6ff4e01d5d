//! The undefined-value sentinel and magnitude masking.
//!
//! ## Purpose
//!
//! This module defines the complex NaN sentinel that marks "no valid result
//! at this point" and the unit-disk masking step applied after truncated
//! series summation.
//!
//! ## Design notes
//!
//! * **Separate step**: Masking is a post-processing pass over a finished
//!   array, not interleaved into summation loops, so convergence logic and
//!   masking policy are independently verifiable.
//! * **Closed boundary**: Points with |z| <= 1 are kept; only |z| > 1 is
//!   masked. Leaving divergent values in place would create artifacts at the
//!   disk boundary instead of a clean cutoff edge.
//!
//! ## Invariants
//!
//! * The sentinel is NaN in both components, so it survives arithmetic and
//!   renders as a gap rather than a color.

use ndarray::{Array, Dimension, Zip};
use num_complex::Complex64;

/// Sentinel marking an undefined result: NaN in both components.
pub const UNDEFINED: Complex64 = Complex64::new(f64::NAN, f64::NAN);

/// Whether a value carries the undefined sentinel (NaN in either component).
#[inline]
#[must_use]
pub fn is_undefined(w: Complex64) -> bool {
    w.re.is_nan() || w.im.is_nan()
}

/// Mask `values` wherever the corresponding `reference` point lies strictly
/// outside the unit disk.
///
/// `reference` is usually the input grid itself; the Euler-function summator
/// instead passes its running power, masking where |z^(n+1)| > 1 after
/// truncation.
pub fn mask_outside_unit_disk<D: Dimension>(
    values: &mut Array<Complex64, D>,
    reference: &Array<Complex64, D>,
) {
    Zip::from(values).and(reference).for_each(|v, &r| {
        if r.norm_sqr() > 1.0 {
            *v = UNDEFINED;
        }
    });
}
