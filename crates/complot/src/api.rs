//! High-level plotting API.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! pairs a function with a region of the complex plane and renders it to an
//! image or a PNG file.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent configuration with sensible defaults (the square
//!   [-2, 2] x [-2, 2] window at 400 samples across).
//! * **Deferred validation**: Ranges, resolution, and scaling are checked
//!   when `render()` or `save()` runs, not while chaining.
//! * **Two function shapes**: Array-level closures plug in directly;
//!   scalar functions are lifted with [`pointwise`].
//!
//! ## Configuration Flow
//!
//! 1. Create a [`Plot`] via `Plot::new(function)`.
//! 2. Chain configuration methods (`.x_range()`, `.resolution()`, ...).
//! 3. Call `.render()` for the raster or `.save(path)` for a PNG.

use image::RgbaImage;
use ndarray::Array2;
use num_complex::Complex64;
use std::path::Path;

use crate::primitives::errors::PlotError;
use crate::primitives::grid::GridSpec;
use crate::render::color::{ColorMap, ColorMode};
use crate::render::renderer;
use crate::special::vectorize::map_grid;

/// Lift a scalar complex function to the array-level plotting contract.
pub fn pointwise<F>(f: F) -> impl Fn(&Array2<Complex64>) -> Array2<Complex64>
where
    F: Fn(Complex64) -> Complex64,
{
    move |grid| map_grid(grid, &f)
}

/// Fluent builder for one domain-coloring figure.
#[derive(Debug, Clone)]
pub struct Plot<F> {
    function: F,
    x_range: (f64, f64),
    y_range: (f64, f64),
    resolution: usize,
    colors: ColorMap,
}

impl<F> Plot<F>
where
    F: Fn(&Array2<Complex64>) -> Array2<Complex64>,
{
    /// Create a plot of `function` with default window and resolution.
    pub fn new(function: F) -> Self {
        Self {
            function,
            x_range: (-2.0, 2.0),
            y_range: (-2.0, 2.0),
            resolution: 400,
            colors: ColorMap::default(),
        }
    }

    /// Set the horizontal axis bounds.
    #[must_use]
    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = (min, max);
        self
    }

    /// Set the vertical axis bounds.
    #[must_use]
    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = (min, max);
        self
    }

    /// Set the number of samples across the horizontal axis. The vertical
    /// count follows from the aspect ratio.
    #[must_use]
    pub fn resolution(mut self, samples: usize) -> Self {
        self.resolution = samples;
        self
    }

    /// Set the magnitude compression exponent.
    #[must_use]
    pub fn abs_scaling(mut self, scaling: f64) -> Self {
        self.colors.abs_scaling = scaling;
        self
    }

    /// Set what pixels encode (full domain coloring, magnitude, or phase).
    #[must_use]
    pub fn mode(mut self, mode: ColorMode) -> Self {
        self.colors.mode = mode;
        self
    }

    /// Render the figure to an RGBA raster.
    ///
    /// # Errors
    ///
    /// [`PlotError`] for invalid ranges, resolution, or scaling, or if the
    /// function breaks the shape contract.
    pub fn render(&self) -> Result<RgbaImage, PlotError> {
        if !self.colors.abs_scaling.is_finite() || self.colors.abs_scaling <= 0.0 {
            return Err(PlotError::InvalidScaling(self.colors.abs_scaling));
        }
        let spec = GridSpec::new(self.x_range, self.y_range, self.resolution)?;
        renderer::render(&self.function, &spec, &self.colors)
    }

    /// Render the figure and write it as a PNG.
    ///
    /// # Errors
    ///
    /// Everything [`render`](Self::render) raises, plus I/O failures.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let image = self.render()?;
        renderer::save_png(&image, path)
    }
}
