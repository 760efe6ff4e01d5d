//! Rectangular complex sampling grids.
//!
//! ## Purpose
//!
//! This module defines [`GridSpec`], the validated description of a
//! rectangular region of the complex plane together with its sampling
//! resolution, and produces the mesh of sample points fed to plotted
//! functions.
//!
//! ## Design notes
//!
//! * **Fail-fast**: Ranges and resolution are validated on construction,
//!   cheap checks first.
//! * **Derived height**: Only the x resolution is chosen by the caller; the
//!   y resolution follows from the aspect ratio so pixels stay square.
//! * **Image orientation**: Row 0 of the mesh is the top of the image
//!   (y = y_max); the imaginary part decreases with the row index.
//!
//! ## Invariants
//!
//! * Both axis counts are at least 2 and endpoints are sampled inclusively.
//! * `mesh()` shape is always `[y_count, x_count]`.
//!
//! ## Non-goals
//!
//! * This module does not evaluate functions or colors.

use ndarray::Array2;
use num_complex::Complex64;

use crate::primitives::errors::PlotError;

// ============================================================================
// Grid Specification
// ============================================================================

/// A validated rectangular sampling grid over the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_count: usize,
    y_count: usize,
}

impl GridSpec {
    /// Create a grid over `x_range` x `y_range` with `x_count` samples per
    /// row. The row count is derived as `round(x_count * height / width)`,
    /// clamped to at least 2.
    pub fn new(
        x_range: (f64, f64),
        y_range: (f64, f64),
        x_count: usize,
    ) -> Result<Self, PlotError> {
        let (x_min, x_max) = x_range;
        let (y_min, y_max) = y_range;

        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Err(PlotError::InvalidRange {
                axis: "x",
                min: x_min,
                max: x_max,
            });
        }
        if !y_min.is_finite() || !y_max.is_finite() || y_min >= y_max {
            return Err(PlotError::InvalidRange {
                axis: "y",
                min: y_min,
                max: y_max,
            });
        }
        if x_count < 2 {
            return Err(PlotError::InvalidResolution(x_count));
        }

        let aspect = (y_max - y_min) / (x_max - x_min);
        let y_count = ((x_count as f64 * aspect).round() as usize).max(2);

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            x_count,
            y_count,
        })
    }

    /// Number of samples per row (image width).
    #[inline]
    #[must_use]
    pub fn x_count(&self) -> usize {
        self.x_count
    }

    /// Number of rows (image height), derived from the aspect ratio.
    #[inline]
    #[must_use]
    pub fn y_count(&self) -> usize {
        self.y_count
    }

    /// Horizontal axis bounds.
    #[inline]
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// Vertical axis bounds.
    #[inline]
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Sample the grid into a `[y_count, x_count]` array of complex points.
    ///
    /// Real part = horizontal axis, imaginary part = vertical axis; both
    /// endpoints are included. Row 0 sits at `y_max` so the array can be
    /// written out as image rows without flipping.
    #[must_use]
    pub fn mesh(&self) -> Array2<Complex64> {
        let dx = (self.x_max - self.x_min) / (self.x_count - 1) as f64;
        let dy = (self.y_max - self.y_min) / (self.y_count - 1) as f64;

        Array2::from_shape_fn((self.y_count, self.x_count), |(row, col)| {
            Complex64::new(
                self.x_min + col as f64 * dx,
                self.y_max - row as f64 * dy,
            )
        })
    }
}
