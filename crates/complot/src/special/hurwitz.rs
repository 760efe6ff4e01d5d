//! Array-level Hurwitz zeta entry points.
//!
//! ## Purpose
//!
//! This module adapts the scalar Hurwitz zeta backend to grids. The plotting
//! engine always sweeps exactly one argument over the grid and holds the
//! other fixed, so both call shapes exist as two explicit functions rather
//! than one function with argument-order-dependent behavior.
//!
//! ## Invariants
//!
//! * Output shape equals input shape for any array rank.
//! * A backend error at one element becomes the undefined sentinel at that
//!   element only; the rest of the batch is unaffected.

use ndarray::{Array, Dimension};
use num_complex::Complex64;

use crate::math::zeta;
use crate::special::vectorize::try_map_grid;

/// Hurwitz zeta with the exponent swept over the grid and a fixed offset:
/// element i is zeta(s_i, a), or the undefined sentinel on backend failure.
#[must_use]
pub fn hurwitz_zeta<D: Dimension>(s: &Array<Complex64, D>, a: Complex64) -> Array<Complex64, D> {
    try_map_grid(s, |exponent| zeta::hurwitz(exponent, a))
}

/// Hurwitz zeta with a fixed exponent and the offset swept over the grid:
/// element i is zeta(s, a_i), with the same per-element failure policy as
/// [`hurwitz_zeta`].
#[must_use]
pub fn hurwitz_zeta_a<D: Dimension>(s: Complex64, a: &Array<Complex64, D>) -> Array<Complex64, D> {
    try_map_grid(a, |offset| zeta::hurwitz(s, offset))
}
