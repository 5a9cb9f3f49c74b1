//! Goodness-of-fit metrics for the active model.
//!
//! ## Purpose
//!
//! This module summarizes how well the current curve explains the point set,
//! for display next to the plot and in the command-line summary.
//!
//! ## Design notes
//!
//! * **Single pass**: All sums are accumulated in one sweep over the points.
//! * **Residual-based**: Metrics are computed from residuals `y - f(x)`.
//!
//! ## Invariants
//!
//! * RMSE, MAE and residual SD are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//!
//! ## Non-goals
//!
//! * No information criteria or intervals; the models are fixed-degree.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::Curve;
use crate::primitives::point::Point;

/// Fit quality metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Sample standard deviation of the residuals.
    pub residual_sd: T,
}

impl<T: Float> Diagnostics<T> {
    /// Relative tolerance for treating the total sum of squares as zero.
    const ZERO_TOLERANCE: f64 = 1e-12;

    /// Compute diagnostics of `curve` over `points`.
    pub fn compute<C: Curve<T>>(points: &[Point<T>], curve: &C) -> Self {
        if points.is_empty() {
            return Self {
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::zero(),
                residual_sd: T::zero(),
            };
        }

        let mut sum_y = T::zero();
        let mut sum_y_sq = T::zero();
        let mut sum_r = T::zero();
        let mut sum_r_sq = T::zero();
        let mut sum_abs_r = T::zero();

        for p in points {
            let r = p.y - curve.evaluate(p.x);
            sum_y = sum_y + p.y;
            sum_y_sq = sum_y_sq + p.y * p.y;
            sum_r = sum_r + r;
            sum_r_sq = sum_r_sq + r * r;
            sum_abs_r = sum_abs_r + r.abs();
        }

        let n = T::from(points.len()).unwrap_or_else(T::one);
        let tol = T::from(Self::ZERO_TOLERANCE).unwrap_or_else(T::epsilon);

        let rmse = (sum_r_sq / n).sqrt();
        let mae = sum_abs_r / n;

        // R^2 = 1 - SS_res / SS_tot
        let ss_tot = sum_y_sq - (sum_y * sum_y) / n;
        let r_squared = if ss_tot > tol * sum_y_sq.abs() {
            T::one() - sum_r_sq / ss_tot
        } else if sum_r_sq <= tol * sum_y_sq.abs() {
            T::one()
        } else {
            T::zero()
        };

        let residual_sd = if points.len() > 1 {
            let var_r = (sum_r_sq - (sum_r * sum_r) / n) / (n - T::one());
            var_r.max(T::zero()).sqrt()
        } else {
            rmse
        };

        Self {
            rmse,
            mae,
            r_squared,
            residual_sd,
        }
    }
}

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R^2:          {:.6}", self.r_squared)?;
        write!(f, "  Residual SD:  {:.6}", self.residual_sd)
    }
}
