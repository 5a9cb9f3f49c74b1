//! Tests for the least-squares line solver.
//!
//! These tests verify:
//! - Exact recovery of colinear data
//! - The manual two-pass formula on noisy data
//! - Degenerate inputs (empty, single point, zero variance)
//!
//! ## Test Organization
//!
//! 1. **Exact Fits** - Colinear points, manual formula
//! 2. **Degenerate Inputs** - Empty, one point, vertical stacks
//! 3. **Precision** - `f32` input, overflowing sums

use approx::assert_relative_eq;

use regview::internals::algorithms::fit::{Curve, Degeneracy, Fit};
use regview::internals::algorithms::linear::{LinearModel, LinearSolver};
use regview::internals::primitives::point::Point;

// ============================================================================
// Helper Functions
// ============================================================================

fn points(xy: &[(f64, f64)]) -> Vec<Point<f64>> {
    xy.iter().map(|&p| Point::from(p)).collect()
}

/// Reference slope and intercept straight from the textbook formula.
fn manual_fit(xy: &[(f64, f64)]) -> (f64, f64) {
    let n = xy.len() as f64;
    let mean_x = xy.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = xy.iter().map(|p| p.1).sum::<f64>() / n;
    let sxy: f64 = xy.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();
    let sxx: f64 = xy.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    let slope = sxy / sxx;
    (slope, mean_y - slope * mean_x)
}

// ============================================================================
// Exact Fit Tests
// ============================================================================

/// Test that colinear points are reproduced exactly.
///
/// Verifies the residual is below 1e-4 at every input point.
#[test]
fn test_colinear_points_fit_exactly() {
    let data: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 3.0 * i as f64 - 2.0)).collect();
    let fit = LinearSolver::fit(&points(&data));

    assert!(!fit.is_degenerate(), "Colinear data should fit");
    let model = fit.model();
    assert_relative_eq!(model.slope, 3.0, epsilon = 1e-10);
    assert_relative_eq!(model.intercept, -2.0, epsilon = 1e-10);

    for (x, y) in data {
        assert!((fit.evaluate(x) - y).abs() < 1e-4, "Residual at x={x}");
    }
}

/// Test the fit on the demo data against the manual formula.
///
/// Verifies slope and intercept agree to 1e-4 and the slope is positive.
#[test]
fn test_demo_data_matches_manual_formula() {
    let data = [(1.0, 1.0), (2.0, 2.0), (3.0, 1.3), (4.0, 3.0), (5.0, 4.5)];
    let (slope, intercept) = manual_fit(&data);
    let model = LinearSolver::fit(&points(&data)).model();

    assert!(model.slope > 0.0);
    assert_relative_eq!(model.slope, slope, epsilon = 1e-4);
    assert_relative_eq!(model.intercept, intercept, epsilon = 1e-4);
    assert_relative_eq!(model.slope, 0.8, epsilon = 1e-12);
    assert_relative_eq!(model.intercept, -0.04, epsilon = 1e-12);
}

/// Test that insertion order does not change the fit.
#[test]
fn test_order_independent() {
    let a = points(&[(1.0, 2.0), (4.0, 1.0), (2.0, 5.0), (7.0, 3.0)]);
    let mut b = a.clone();
    b.reverse();

    let ma = LinearSolver::fit(&a).model();
    let mb = LinearSolver::fit(&b).model();
    assert_relative_eq!(ma.slope, mb.slope, epsilon = 1e-12);
    assert_relative_eq!(ma.intercept, mb.intercept, epsilon = 1e-12);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test that an empty point set yields the zero line.
#[test]
fn test_empty_input_is_zero_model() {
    let fit = LinearSolver::fit::<f64>(&[]);

    assert_eq!(
        fit,
        Fit::Degenerate {
            model: LinearModel::zero(),
            reason: Degeneracy::TooFewPoints { got: 0, min: 1 },
        }
    );
    assert_eq!(fit.evaluate(42.0), 0.0);
}

/// Test a single point.
///
/// Verifies slope 0 and an intercept equal to the point's y.
#[test]
fn test_single_point_is_flat_line() {
    let fit = LinearSolver::fit(&points(&[(3.0, 7.5)]));

    assert_eq!(fit.degeneracy(), Some(Degeneracy::ZeroVariance));
    assert_eq!(fit.model().slope, 0.0);
    assert_relative_eq!(fit.model().intercept, 7.5);
}

/// Test zero variance in x.
///
/// Verifies slope == 0 and the line passes through the mean of y.
#[test]
fn test_zero_variance_slope_is_zero() {
    let fit = LinearSolver::fit(&points(&[(2.0, 1.0), (2.0, 3.0), (2.0, 8.0)]));

    assert!(fit.is_degenerate());
    assert_eq!(fit.model().slope, 0.0);
    assert_relative_eq!(fit.model().intercept, 4.0, epsilon = 1e-12);
    assert!(fit.evaluate(100.0).is_finite());
}

// ============================================================================
// Precision Tests
// ============================================================================

/// Test that the solver works in single precision.
#[test]
fn test_f32_fit() {
    let data: Vec<Point<f32>> = (0..5).map(|i| Point::new(i as f32, 0.5 * i as f32 + 1.0)).collect();
    let model = LinearSolver::fit(&data).model();

    assert_relative_eq!(model.slope, 0.5_f32, epsilon = 1e-5);
    assert_relative_eq!(model.intercept, 1.0_f32, epsilon = 1e-5);
}

/// Test that finite input whose sums overflow falls back to the zero line.
///
/// Verifies the model stays finite instead of becoming NaN.
#[test]
fn test_overflowing_sums_fall_back_to_zero() {
    let fit = LinearSolver::fit(&points(&[(1e160, 1e160), (-1e160, -1e160), (0.0, 0.0)]));

    assert_eq!(
        fit,
        Fit::Degenerate {
            model: LinearModel::zero(),
            reason: Degeneracy::Overflow,
        }
    );
    assert_eq!(fit.evaluate(1.0), 0.0);

    let fit = LinearSolver::fit(&points(&[(f64::MAX, 1.0), (f64::MAX, 2.0)]));
    assert_eq!(fit.degeneracy(), Some(Degeneracy::Overflow));

    let fit = LinearSolver::fit(&[Point::new(1e20_f32, 1e20), Point::new(-1e20, 0.0)]);
    assert_eq!(fit.degeneracy(), Some(Degeneracy::Overflow));
    assert!(fit.model().slope.is_finite() && fit.model().intercept.is_finite());
}
