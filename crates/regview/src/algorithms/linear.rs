//! Ordinary least-squares line fit.
//!
//! ## Purpose
//!
//! Fits `y = slope·x + intercept` to a point set with the classic two-pass
//! formula: means first, then centered cross products.
//!
//! ## Design notes
//!
//! * **Centered sums**: Accumulating deviations from the mean avoids the
//!   cancellation of the one-pass `Σx² - (Σx)²/n` form.
//! * **Fallbacks**: An empty set gives `{0, 0}`; zero x-variance gives a
//!   horizontal line through the mean of y. Sums that overflow `T` give
//!   `{0, 0}`. All three are reported as degenerate.
//!
//! ## Invariants
//!
//! * The fitted line passes through `(mean_x, mean_y)`.
//! * The returned model is always finite for finite input.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::{Curve, Degeneracy, Fit};
use crate::primitives::point::Point;

// ============================================================================
// Linear Model
// ============================================================================

/// Straight line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearModel<T> {
    /// Rate of change of y with x.
    pub slope: T,
    /// Value of y at `x = 0`.
    pub intercept: T,
}

impl<T: Float> LinearModel<T> {
    /// Line with the given coefficients.
    pub fn new(slope: T, intercept: T) -> Self {
        Self { slope, intercept }
    }

    /// The `y = 0` line.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Float> Curve<T> for LinearModel<T> {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

// ============================================================================
// Linear Solver
// ============================================================================

/// Least-squares line fitter.
pub struct LinearSolver;

impl LinearSolver {
    /// Fit a least-squares line to `points`.
    pub fn fit<T: Float>(points: &[Point<T>]) -> Fit<LinearModel<T>> {
        if points.is_empty() {
            return Fit::Degenerate {
                model: LinearModel::zero(),
                reason: Degeneracy::TooFewPoints { got: 0, min: 1 },
            };
        }

        let n = T::from(points.len()).unwrap_or_else(T::one);
        let (sum_x, sum_y) = points
            .iter()
            .fold((T::zero(), T::zero()), |(sx, sy), p| (sx + p.x, sy + p.y));
        let mean_x = sum_x / n;
        let mean_y = sum_y / n;
        if !(mean_x.is_finite() && mean_y.is_finite()) {
            return Self::overflow();
        }

        let mut sxy = T::zero();
        let mut sxx = T::zero();
        for p in points {
            let dx = p.x - mean_x;
            let dy = p.y - mean_y;
            sxy = sxy + dx * dy;
            sxx = sxx + dx * dx;
        }

        if sxx == T::zero() {
            return Fit::Degenerate {
                model: LinearModel::new(T::zero(), mean_y),
                reason: Degeneracy::ZeroVariance,
            };
        }

        if !(sxx.is_finite() && sxy.is_finite()) {
            return Self::overflow();
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        if !(slope.is_finite() && intercept.is_finite()) {
            return Self::overflow();
        }
        Fit::Fitted(LinearModel::new(slope, intercept))
    }

    fn overflow<T: Float>() -> Fit<LinearModel<T>> {
        Fit::Degenerate {
            model: LinearModel::zero(),
            reason: Degeneracy::Overflow,
        }
    }
}
