//! Layer 4: Render
//!
//! # Purpose
//!
//! This layer turns evaluated grids into raster images:
//! - Domain coloring (complex sample -> RGBA pixel)
//! - Grid evaluation, parallel colorization, and PNG output
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Render ← You are here
//!   ↓
//! Layer 3: Special
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Domain coloring: one complex sample to one RGBA pixel.
pub mod color;

/// Grid evaluation and rasterization.
pub mod renderer;
