//! # complot — domain-coloring plots of complex functions
//!
//! complot renders complex-valued functions as raster images: phase maps to
//! hue, magnitude to lightness, and undefined points to transparent gaps.
//! It ships the special-function backends the interesting figures need
//! (gamma, digamma, Hurwitz zeta and its derived family, truncated
//! Lambert-series summators), all operating on `ndarray` grids of
//! `num_complex::Complex64`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use complot::prelude::*;
//!
//! // A rational function with visible zeros and poles.
//! let plot = Plot::new(pointwise(|z| {
//!     (z * z - 1.0) * (z - Complex64::new(2.0, 1.0)) / (z * z + Complex64::new(2.0, 2.0))
//! }))
//! .x_range(-3.0, 3.0)
//! .y_range(-3.0, 3.0)
//! .resolution(400);
//!
//! plot.save("rational.png")?;
//! # Result::<(), PlotError>::Ok(())
//! ```
//!
//! Array-level functions (like the zeta family, which wants per-element
//! failure isolation) plug in directly:
//!
//! ```no_run
//! use complot::prelude::*;
//!
//! Plot::new(|grid: &ndarray::Array2<Complex64>| zeta(grid))
//!     .x_range(-30.0, 30.0)
//!     .y_range(-30.0, 30.0)
//!     .save("zeta.png")?;
//! # Result::<(), PlotError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Per-point backend failures never surface: they become the `UNDEFINED`
//! sentinel (complex NaN) and render as transparent pixels. Configuration
//! and I/O problems surface as [`PlotError`](prelude::PlotError).

// Layer 1: Primitives - errors, sentinel, sampling grids.
pub mod primitives;

// Layer 2: Math - scalar special-function backends.
pub mod math;

// Layer 3: Special - grid-level function layer.
pub mod special;

// Layer 4: Render - domain coloring and rasterization.
pub mod render;

// High-level fluent API for single figures.
pub mod api;

// Standard complot prelude.
pub mod prelude {
    pub use crate::api::{pointwise, Plot};
    pub use crate::math::gamma::{digamma, gamma};
    pub use crate::primitives::errors::{EvalError, PlotError};
    pub use crate::primitives::grid::GridSpec;
    pub use crate::primitives::sentinel::{is_undefined, mask_outside_unit_disk, UNDEFINED};
    pub use crate::render::color::{ColorMap, ColorMode};
    pub use crate::special::derived::{bernoulli, dirichlet_eta, polygamma, riemann_xi, zeta};
    pub use crate::special::hurwitz::{hurwitz_zeta, hurwitz_zeta_a};
    pub use crate::special::lambert::{
        euler_function, lambert_1, lambert_liouville, lambert_phi, lambert_von_mangoldt,
        EULER_TERMS, LAMBERT_1_TERMS, LIOUVILLE_TERMS, VON_MANGOLDT_TERMS,
    };
    pub use crate::special::vectorize::{map_grid, try_map_grid};
    pub use num_complex::Complex64;
}
