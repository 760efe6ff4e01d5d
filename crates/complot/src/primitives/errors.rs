//! Error types for plotting and point evaluation.
//!
//! ## Purpose
//!
//! This module defines the two error families of the crate: fatal plot
//! configuration/output failures, and recoverable per-point evaluation
//! failures.
//!
//! ## Design notes
//!
//! * **Two taxonomies**: [`PlotError`] terminates a render; [`EvalError`] is
//!   always caught at the point that raised it and replaced by the undefined
//!   sentinel.
//! * **Contextual**: Errors carry the offending values (axis, range, shape).
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Invariants
//!
//! * An `EvalError` never crosses an array boundary: callers substitute the
//!   sentinel element-wise and continue the batch.
//! * All variants provide sufficient context for diagnosis.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself.
//! * No retry or recovery strategies live here.

use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Plot Error
// ============================================================================

/// Fatal error raised while configuring or producing a plot.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    /// An axis range must be a finite interval with `min < max`.
    InvalidRange {
        /// Axis name ("x" or "y").
        axis: &'static str,
        /// Lower bound provided.
        min: f64,
        /// Upper bound provided.
        max: f64,
    },

    /// Grid resolution must be at least 2 samples per axis.
    InvalidResolution(usize),

    /// Magnitude scaling must be positive and finite.
    InvalidScaling(f64),

    /// A plotted function returned an array whose shape does not match
    /// the sampling grid.
    ShapeMismatch {
        /// Grid shape (rows, cols).
        expected: (usize, usize),
        /// Shape the function returned.
        got: (usize, usize),
    },

    /// Encoding or writing the output image failed.
    ImageWrite(String),
}

impl Display for PlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidRange { axis, min, max } => {
                write!(f, "Invalid {axis} range: [{min}, {max}] (must be finite with min < max)")
            }
            Self::InvalidResolution(n) => {
                write!(f, "Invalid resolution: {n} (must be at least 2)")
            }
            Self::InvalidScaling(s) => {
                write!(f, "Invalid magnitude scaling: {s} (must be positive and finite)")
            }
            Self::ShapeMismatch { expected, got } => {
                write!(
                    f,
                    "Function output shape {}x{} does not match grid shape {}x{}",
                    got.0, got.1, expected.0, expected.1
                )
            }
            Self::ImageWrite(msg) => write!(f, "Image output failed: {msg}"),
        }
    }
}

impl Error for PlotError {}

impl From<image::ImageError> for PlotError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageWrite(err.to_string())
    }
}

// ============================================================================
// Evaluation Error
// ============================================================================

/// Failure of a scalar special-function backend at a single point.
///
/// These are recoverable by policy: adapters catch them per element and
/// substitute the undefined sentinel, so one bad point never aborts a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalError {
    /// The zeta function has a simple pole at exponent 1.
    PoleAtOne,

    /// The Hurwitz offset parameter hit a non-positive real integer, where
    /// the series terms are singular.
    SingularOffset(f64),

    /// An input was NaN or infinite before evaluation started.
    NonFiniteInput,
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::PoleAtOne => write!(f, "Pole at exponent 1"),
            Self::SingularOffset(a) => {
                write!(f, "Singular offset parameter: {a} (non-positive integer)")
            }
            Self::NonFiniteInput => write!(f, "Non-finite input"),
        }
    }
}

impl Error for EvalError {}
