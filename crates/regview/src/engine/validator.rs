//! Input validation for session configuration and point data.
//!
//! ## Purpose
//!
//! This module checks the values that would otherwise poison the coordinate
//! transform or the solvers: non-finite points, empty or non-finite
//! surfaces, negative margins and padding, and non-positive thresholds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or correct invalid values.
//! * Degenerate fits are not validation failures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::mapping::Margins;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

/// Validation utility for session configuration and point data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate that a point is finite.
    pub fn validate_point<T: Float>(point: &Point<T>) -> Result<(), RegressionError> {
        if !point.is_finite() {
            return Err(RegressionError::InvalidNumericValue(format!(
                "point=({}, {})",
                point.x.to_f64().unwrap_or(f64::NAN),
                point.y.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate every point of a set, reporting the first offending index.
    pub fn validate_points<T: Float>(points: &[Point<T>]) -> Result<(), RegressionError> {
        for (i, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "points[{}]=({}, {})",
                    i,
                    p.x.to_f64().unwrap_or(f64::NAN),
                    p.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a single scalar (e.g. a pixel coordinate) for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), RegressionError> {
        if !val.is_finite() {
            return Err(RegressionError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate the rendering surface size.
    pub fn validate_surface<T: Float>(width: T, height: T) -> Result<(), RegressionError> {
        let ok = |v: T| v.is_finite() && v > T::zero();
        if !ok(width) || !ok(height) {
            return Err(RegressionError::InvalidSurface {
                width: width.to_f64().unwrap_or(f64::NAN),
                height: height.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the plot margins.
    pub fn validate_margins<T: Float>(margins: &Margins<T>) -> Result<(), RegressionError> {
        let sides = [
            ("left", margins.left),
            ("right", margins.right),
            ("top", margins.top),
            ("bottom", margins.bottom),
        ];
        for (side, value) in sides {
            if !value.is_finite() || value < T::zero() {
                return Err(RegressionError::InvalidMargin {
                    side,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Validate the bounds padding.
    pub fn validate_padding<T: Float>(padding: T) -> Result<(), RegressionError> {
        if !padding.is_finite() || padding < T::zero() {
            return Err(RegressionError::InvalidPadding(
                padding.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a strictly positive threshold.
    pub fn validate_threshold<T: Float>(
        value: T,
        name: &'static str,
    ) -> Result<(), RegressionError> {
        if !value.is_finite() || value <= T::zero() {
            return Err(RegressionError::InvalidThreshold {
                name,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the number of curve segments.
    pub fn validate_segments(segments: usize) -> Result<(), RegressionError> {
        if segments == 0 {
            return Err(RegressionError::InvalidSegments(segments));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(param) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
