//! Residuals and outlier flags.
//!
//! A point is highlighted as an outlier when its vertical distance to the
//! active curve exceeds a fixed threshold in data units.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::Curve;
use crate::primitives::point::Point;

/// Residual threshold for outlier highlighting, in data units.
pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 0.5;

/// Residual `y - f(x)` of a single point.
#[inline]
pub fn residual<T: Float, C: Curve<T>>(point: &Point<T>, curve: &C) -> T {
    point.y - curve.evaluate(point.x)
}

/// Residuals of every point, in input order.
pub fn residuals<T: Float, C: Curve<T>>(points: &[Point<T>], curve: &C) -> Vec<T> {
    points.iter().map(|p| residual(p, curve)).collect()
}

/// `true` for every point whose absolute residual exceeds `threshold`.
pub fn flag_outliers<T: Float, C: Curve<T>>(
    points: &[Point<T>],
    curve: &C,
    threshold: T,
) -> Vec<bool> {
    points
        .iter()
        .map(|p| residual(p, curve).abs() > threshold)
        .collect()
}

/// Indices of the points whose absolute residual exceeds `threshold`.
pub fn outlier_indices<T: Float, C: Curve<T>>(
    points: &[Point<T>],
    curve: &C,
    threshold: T,
) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| residual(p, curve).abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}
