//! Grid evaluation and rasterization.
//!
//! ## Purpose
//!
//! This module drives one figure: sample the grid, evaluate the plotted
//! function array-in/array-out, color every sample, and hand back the
//! raster (or write it as a PNG).
//!
//! ## Design notes
//!
//! * **Shape contract**: The function must return an array of the mesh's
//!   shape; anything else is a fatal error, not a render artifact.
//! * **Row parallelism**: Pixels are independent, so rows are colored in
//!   parallel with rayon. No ordering is observable in the output.
//!
//! ## Non-goals
//!
//! * No axes, colorbars, or contour overlays; the raster is the figure.

use image::{ImageFormat, Rgba, RgbaImage};
use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;
use std::path::Path;

use crate::primitives::errors::PlotError;
use crate::primitives::grid::GridSpec;
use crate::render::color::ColorMap;

/// Bytes per RGBA pixel.
const PIXEL_BYTES: usize = 4;

/// Evaluate `function` on the grid and color the result.
///
/// # Errors
///
/// [`PlotError::ShapeMismatch`] if the function breaks the shape contract.
pub fn render<F>(function: F, spec: &GridSpec, colors: &ColorMap) -> Result<RgbaImage, PlotError>
where
    F: Fn(&Array2<Complex64>) -> Array2<Complex64>,
{
    let mesh = spec.mesh();
    let values = function(&mesh);
    if values.dim() != mesh.dim() {
        return Err(PlotError::ShapeMismatch {
            expected: mesh.dim(),
            got: values.dim(),
        });
    }

    let (rows, cols) = values.dim();
    let mut buffer = vec![0_u8; rows * cols * PIXEL_BYTES];
    buffer
        .par_chunks_mut(cols * PIXEL_BYTES)
        .enumerate()
        .for_each(|(row, bytes)| {
            for (col, pixel) in bytes.chunks_exact_mut(PIXEL_BYTES).enumerate() {
                let Rgba(rgba) = colors.shade(values[[row, col]]);
                pixel.copy_from_slice(&rgba);
            }
        });

    RgbaImage::from_raw(cols as u32, rows as u32, buffer)
        .ok_or_else(|| PlotError::ImageWrite(String::from("pixel buffer size mismatch")))
}

/// Write an image as PNG.
///
/// # Errors
///
/// [`PlotError::ImageWrite`] on encoding or I/O failure.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), PlotError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
