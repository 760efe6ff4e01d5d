//! Vectorization shim for scalar backends.
//!
//! ## Purpose
//!
//! This module lifts functions of one complex scalar to element-wise maps
//! over arrays of any rank, so scalar-only backends satisfy the grid-based
//! plotting contract.
//!
//! ## Design notes
//!
//! * **Shape-preserving**: Output shape always equals input shape; the map
//!   is generic over `ndarray::Dimension`, so rank 0 through N all work.
//! * **Failure isolation**: The fallible variant substitutes the undefined
//!   sentinel for any element whose evaluation errors; one point's failure
//!   never affects its neighbors.
//!
//! ## Non-goals
//!
//! * No parallelism here; this is a plain element-wise map.

use ndarray::{Array, Dimension};
use num_complex::Complex64;

use crate::primitives::errors::EvalError;
use crate::primitives::sentinel::UNDEFINED;

/// Apply a scalar complex function to every element of `grid`.
#[must_use]
pub fn map_grid<D, F>(grid: &Array<Complex64, D>, f: F) -> Array<Complex64, D>
where
    D: Dimension,
    F: Fn(Complex64) -> Complex64,
{
    grid.mapv(f)
}

/// Apply a fallible scalar complex function to every element of `grid`,
/// substituting the undefined sentinel wherever it errors.
#[must_use]
pub fn try_map_grid<D, F>(grid: &Array<Complex64, D>, f: F) -> Array<Complex64, D>
where
    D: Dimension,
    F: Fn(Complex64) -> Result<Complex64, EvalError>,
{
    grid.mapv(|z| f(z).unwrap_or(UNDEFINED))
}
