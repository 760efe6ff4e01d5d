//! Tests for the renderer and the fluent plot API.
//!
//! These tests verify the raster contract (dimensions, transparency of
//! undefined points, opacity of finite ones), the shape-contract
//! enforcement, and the builder's deferred validation.
//!
//! ## Test Organization
//!
//! 1. **Raster contract** - Dimensions and pixel semantics
//! 2. **Shape contract** - Functions that break it are fatal
//! 3. **Builder validation** - Deferred errors from render()
//! 4. **Masked figures** - Sentinel regions render as gaps

use ndarray::Array2;
use num_complex::Complex64;

use complot::prelude::*;

// ============================================================================
// Raster Contract
// ============================================================================

#[test]
fn image_dimensions_follow_the_grid() {
    let image = Plot::new(pointwise(|z| z))
        .x_range(-2.0, 2.0)
        .y_range(-1.0, 1.0)
        .resolution(40)
        .render()
        .unwrap();
    assert_eq!(image.width(), 40);
    assert_eq!(image.height(), 20);
}

#[test]
fn undefined_points_render_transparent() {
    let image = Plot::new(|grid: &Array2<Complex64>| grid.mapv(|_| UNDEFINED))
        .resolution(8)
        .render()
        .unwrap();
    assert!(image.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn finite_points_render_opaque() {
    let image = Plot::new(pointwise(|z| z)).resolution(8).render().unwrap();
    assert!(image.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn zero_is_black_and_infinity_is_white() {
    let zeros = Plot::new(|g: &Array2<Complex64>| g.mapv(|_| Complex64::new(0.0, 0.0)))
        .resolution(4)
        .render()
        .unwrap();
    assert!(zeros.pixels().all(|p| p.0 == [0, 0, 0, 255]));

    let infs = Plot::new(|g: &Array2<Complex64>| g.mapv(|_| Complex64::new(f64::INFINITY, 0.0)))
        .resolution(4)
        .render()
        .unwrap();
    assert!(infs.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

// ============================================================================
// Shape Contract
// ============================================================================

#[test]
fn wrong_output_shape_is_fatal() {
    let result = Plot::new(|_: &Array2<Complex64>| Array2::zeros((1, 1)))
        .resolution(8)
        .render();
    assert!(matches!(result, Err(PlotError::ShapeMismatch { .. })));
}

// ============================================================================
// Builder Validation
// ============================================================================

#[test]
fn builder_defers_range_validation_to_render() {
    // Chaining bad configuration never panics; render reports it.
    let plot = Plot::new(pointwise(|z| z)).x_range(2.0, -2.0);
    assert!(matches!(
        plot.render(),
        Err(PlotError::InvalidRange { axis: "x", .. })
    ));
}

#[test]
fn builder_rejects_bad_scaling_and_resolution() {
    assert!(matches!(
        Plot::new(pointwise(|z| z)).abs_scaling(0.0).render(),
        Err(PlotError::InvalidScaling(_))
    ));
    assert!(matches!(
        Plot::new(pointwise(|z| z)).resolution(1).render(),
        Err(PlotError::InvalidResolution(1))
    ));
}

// ============================================================================
// Masked Figures
// ============================================================================

#[test]
fn euler_function_window_has_transparent_corners() {
    // Over [-1.1, 1.1]^2 the corners lie outside the unit disk and must be
    // gaps; the center is inside and must be a real color.
    let image = Plot::new(|g: &Array2<Complex64>| euler_function(g, 50))
        .x_range(-1.1, 1.1)
        .y_range(-1.1, 1.1)
        .resolution(9)
        .render()
        .unwrap();

    assert_eq!(image.get_pixel(0, 0).0[3], 0);
    assert_eq!(image.get_pixel(8, 8).0[3], 0);
    assert_eq!(image.get_pixel(4, 4).0[3], 255);
}
