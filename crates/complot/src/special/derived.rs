//! Special functions derived from the zeta backend.
//!
//! ## Purpose
//!
//! Closed-form combinations built atop the Hurwitz zeta entry points: the
//! Riemann zeta function, the Bernoulli function, the Dirichlet eta
//! function, the Riemann xi function, and the complex polygamma function.
//!
//! ## Design notes
//!
//! * **Element-wise**: All functions preserve the shape of whatever array
//!   the zeta adapter returns; sentinel values propagate untouched through
//!   the closed-form arithmetic (NaN times anything stays NaN).
//! * **No extra error handling**: Per-point failure policy lives entirely in
//!   the zeta adapter.

use ndarray::{Array, Dimension, Zip};
use num_complex::Complex64;
use std::f64::consts::PI;

use crate::math::gamma;
use crate::special::hurwitz::{hurwitz_zeta, hurwitz_zeta_a};
use crate::special::vectorize::map_grid;

const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Riemann zeta: zeta(s) = zeta(s, 1).
#[must_use]
pub fn zeta<D: Dimension>(s: &Array<Complex64, D>) -> Array<Complex64, D> {
    hurwitz_zeta(s, ONE)
}

/// The Bernoulli function B(z) = -z * zeta(1 - z).
///
/// B(n) reproduces the Bernoulli numbers at positive integers (with
/// B(1) = +1/2); the pole of zeta at z = 0 surfaces as the sentinel there.
#[must_use]
pub fn bernoulli<D: Dimension>(z: &Array<Complex64, D>) -> Array<Complex64, D> {
    let reflected = z.mapv(|v| ONE - v);
    let mut out = hurwitz_zeta(&reflected, ONE);
    Zip::from(&mut out).and(z).for_each(|w, &v| *w *= -v);
    out
}

/// Dirichlet eta (alternating zeta): eta(z) = (1 - 2^(1-z)) * zeta(z).
#[must_use]
pub fn dirichlet_eta<D: Dimension>(z: &Array<Complex64, D>) -> Array<Complex64, D> {
    let mut out = zeta(z);
    Zip::from(&mut out).and(z).for_each(|w, &v| {
        *w *= ONE - Complex64::from(2.0).powc(ONE - v);
    });
    out
}

/// Riemann xi: xi(z) = 1/2 * z * (z-1) * pi^(-z/2) * gamma(z/2) * zeta(z),
/// with the principal branch of pi^(-z/2).
#[must_use]
pub fn riemann_xi<D: Dimension>(z: &Array<Complex64, D>) -> Array<Complex64, D> {
    let mut out = zeta(z);
    Zip::from(&mut out).and(z).for_each(|w, &v| {
        *w *= 0.5
            * v
            * (v - 1.0)
            * Complex64::from(PI).powc(-v / 2.0)
            * gamma::gamma(v / 2.0);
    });
    out
}

/// Complex polygamma of non-negative integer order.
///
/// Order 0 is the digamma function; order m >= 1 is the m-th derivative of
/// digamma, (-1)^(m+1) * m! * zeta(m+1, z), swept over the second zeta
/// argument.
#[must_use]
pub fn polygamma<D: Dimension>(z: &Array<Complex64, D>, order: u32) -> Array<Complex64, D> {
    if order == 0 {
        return map_grid(z, gamma::digamma);
    }

    let sign = if order % 2 == 0 { -1.0 } else { 1.0 };
    let factorial: f64 = (1..=order).map(f64::from).product();
    let exponent = Complex64::from(f64::from(order) + 1.0);

    let mut out = hurwitz_zeta_a(exponent, z);
    out.mapv_inplace(|w| sign * factorial * w);
    out
}
