//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the scalar special-function backends sampled by the
//! layers above:
//! - Gamma and digamma for complex arguments
//! - The Hurwitz zeta function
//!
//! These are pure f64 kernels with no array or plotting logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Render
//!   ↓
//! Layer 3: Special
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Complex gamma and digamma backends.
pub mod gamma;

/// Hurwitz zeta backend.
pub mod zeta;
