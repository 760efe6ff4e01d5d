//! Domain coloring: one complex sample to one RGBA pixel.
//!
//! ## Purpose
//!
//! This module maps complex function values to colors: phase becomes OKLCH
//! hue, magnitude becomes lightness, and the undefined sentinel becomes a
//! fully transparent pixel so masked regions render as gaps.
//!
//! ## Design notes
//!
//! * **Perceptual space**: Colors are built in OKLCH and converted through
//!   Oklab and linear sRGB (Ottosson's matrices), so equal phase steps read
//!   as equal hue steps.
//! * **Magnitude curve**: lightness = r/(r+1) with r = |w|^(1/abs_scaling).
//!   Larger `abs_scaling` compresses the approach to white, which keeps
//!   figures with huge dynamic range readable.
//! * **Gamut**: Chroma peaks at mid-lightness and is reduced by binary
//!   search until the color fits sRGB, preserving lightness and hue.
//!
//! ## Invariants
//!
//! * NaN in either component (the sentinel) maps to alpha 0.
//! * Infinite magnitude maps to opaque white; zero maps to black.

use image::Rgba;
use num_complex::Complex64;

use crate::primitives::sentinel::is_undefined;

// ============================================================================
// Color Constants
// ============================================================================

/// Peak chroma at mid-lightness for the full color mode.
const CHROMA_PEAK: f64 = 0.14;

/// Fixed lightness of the phase-only mode.
const ARG_LIGHTNESS: f64 = 0.72;

/// Fixed chroma of the phase-only mode (before gamut reduction).
const ARG_CHROMA: f64 = 0.12;

/// Iterations of the binary search for the largest in-gamut chroma.
const GAMUT_SEARCH_STEPS: u32 = 16;

// ============================================================================
// Color Map
// ============================================================================

/// What a pixel encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Phase as hue, magnitude as lightness.
    #[default]
    Full,

    /// Magnitude only, achromatic.
    AbsOnly,

    /// Phase only, at constant lightness.
    ArgOnly,
}

/// Mapping from complex samples to RGBA pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMap {
    /// What the pixel encodes.
    pub mode: ColorMode,

    /// Magnitude compression exponent; 1.0 is the plain r/(r+1) curve.
    pub abs_scaling: f64,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            mode: ColorMode::Full,
            abs_scaling: 1.0,
        }
    }
}

impl ColorMap {
    /// Map one complex sample to a pixel.
    #[must_use]
    pub fn shade(&self, w: Complex64) -> Rgba<u8> {
        if is_undefined(w) {
            return Rgba([0, 0, 0, 0]);
        }
        if !w.is_finite() {
            return Rgba([255, 255, 255, 255]);
        }

        let r = w.norm();
        let scaled = r.powf(self.abs_scaling.recip());
        let lightness = scaled / (scaled + 1.0);
        let hue = {
            let deg = w.arg().to_degrees();
            if deg < 0.0 { deg + 360.0 } else { deg }
        };

        match self.mode {
            ColorMode::Full => {
                let chroma = CHROMA_PEAK * 4.0 * lightness * (1.0 - lightness);
                oklch_pixel(lightness, chroma, hue)
            }
            ColorMode::AbsOnly => oklch_pixel(lightness, 0.0, 0.0),
            ColorMode::ArgOnly => oklch_pixel(ARG_LIGHTNESS, ARG_CHROMA, hue),
        }
    }
}

// ============================================================================
// OKLCH -> sRGB Pipeline
// ============================================================================

/// Convert an OKLCH color to an opaque 8-bit pixel, reducing chroma until it
/// fits the sRGB gamut.
fn oklch_pixel(l: f64, c: f64, h: f64) -> Rgba<u8> {
    let c = max_in_gamut_chroma(l, c, h);
    let (r, g, b) = oklch_to_srgb(l, c, h);
    Rgba([to_u8(r), to_u8(g), to_u8(b), 255])
}

/// Largest chroma not exceeding `c` that stays inside sRGB, found by binary
/// search over the chroma axis (lightness and hue are preserved).
fn max_in_gamut_chroma(l: f64, c: f64, h: f64) -> f64 {
    if in_srgb_gamut(l, c, h) {
        return c;
    }
    let mut lo = 0.0_f64;
    let mut hi = c;
    for _ in 0..GAMUT_SEARCH_STEPS {
        let mid = 0.5 * (lo + hi);
        if in_srgb_gamut(l, mid, h) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

fn in_srgb_gamut(l: f64, c: f64, h: f64) -> bool {
    let (r, g, b) = oklab_to_linear_srgb(l, c * h.to_radians().cos(), c * h.to_radians().sin());
    (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&g) && (0.0..=1.0).contains(&b)
}

fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    let (r, g, b) = oklab_to_linear_srgb(l, c * h_rad.cos(), c * h_rad.sin());
    (
        linear_to_srgb(r.clamp(0.0, 1.0)),
        linear_to_srgb(g.clamp(0.0, 1.0)),
        linear_to_srgb(b.clamp(0.0, 1.0)),
    )
}

/// Oklab to linear sRGB through the LMS cone space.
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = l_ok + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l_ok - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l_ok - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
        -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
        -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
    )
}

/// Apply the sRGB transfer function to one linear component.
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
