//! Active regression model.
//!
//! ## Purpose
//!
//! [`ModelState`] remembers which regression kind is selected and holds the
//! coefficients fitted for that kind. It is recomputed from the point set
//! whenever the points change or the kind is switched.
//!
//! ## Design notes
//!
//! * **One valid model**: The fitted model lives inside [`ActiveModel`],
//!   whose variant always matches the selected kind, so a stale model of the
//!   other kind can never be evaluated.
//! * **Atomic replace**: `recompute` builds the new fit completely before
//!   overwriting the stored one.
//!
//! ## Invariants
//!
//! * `state.kind()` and the `ActiveModel` variant always agree.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::{Curve, Degeneracy, Fit};
use crate::algorithms::linear::{LinearModel, LinearSolver};
use crate::algorithms::quadratic::{QuadraticModel, QuadraticSolver};
use crate::math::bounds::Bounds;
use crate::primitives::point::Point;

// ============================================================================
// Regression Kind
// ============================================================================

/// Which closed-form model is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum RegressionKind {
    /// Straight line.
    #[default]
    Linear,

    /// Second-degree polynomial.
    Quadratic,
}

impl Display for RegressionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Quadratic => write!(f, "Polynomial (2nd degree)"),
        }
    }
}

// ============================================================================
// Active Model
// ============================================================================

/// Fit outcome of the selected kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveModel<T> {
    /// Line fit.
    Linear(Fit<LinearModel<T>>),

    /// Parabola fit.
    Quadratic(Fit<QuadraticModel<T>>),
}

impl<T: Float> ActiveModel<T> {
    /// Fit `kind` to `points`.
    pub fn fit(kind: RegressionKind, points: &[Point<T>]) -> Self {
        match kind {
            RegressionKind::Linear => Self::Linear(LinearSolver::fit(points)),
            RegressionKind::Quadratic => Self::Quadratic(QuadraticSolver::fit(points)),
        }
    }

    /// Kind of this model.
    pub fn kind(&self) -> RegressionKind {
        match self {
            Self::Linear(_) => RegressionKind::Linear,
            Self::Quadratic(_) => RegressionKind::Quadratic,
        }
    }

    /// Why the fit is degenerate, if it is.
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match self {
            Self::Linear(fit) => fit.degeneracy(),
            Self::Quadratic(fit) => fit.degeneracy(),
        }
    }
}

impl<T: Float> Curve<T> for ActiveModel<T> {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        match self {
            Self::Linear(fit) => fit.evaluate(x),
            Self::Quadratic(fit) => fit.evaluate(x),
        }
    }
}

impl<T: Float + Display> Display for ActiveModel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Linear(fit) => {
                let m = fit.model();
                write!(f, "y = {:.6}·x + {:.6}", m.slope, m.intercept)
            }
            Self::Quadratic(fit) => {
                let m = fit.model();
                write!(f, "y = {:.6}·x² + {:.6}·x + {:.6}", m.a, m.b, m.c)
            }
        }
    }
}

// ============================================================================
// Model State
// ============================================================================

/// Selected regression kind and its current fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelState<T> {
    model: ActiveModel<T>,
}

impl<T: Float> Default for ModelState<T> {
    fn default() -> Self {
        Self::new(RegressionKind::default())
    }
}

impl<T: Float> ModelState<T> {
    /// State for `kind` with nothing fitted yet (the empty-set fallback).
    pub fn new(kind: RegressionKind) -> Self {
        Self {
            model: ActiveModel::fit(kind, &[]),
        }
    }

    /// Switch to `kind` and refit `points`.
    pub fn set_kind(&mut self, kind: RegressionKind, points: &[Point<T>]) {
        self.model = ActiveModel::fit(kind, points);
        debug!("model kind set to {kind}");
    }

    /// Refit the selected kind to `points`.
    pub fn recompute(&mut self, points: &[Point<T>]) {
        let model = ActiveModel::fit(self.kind(), points);
        if let Some(reason) = model.degeneracy() {
            debug!("{} fit of {} points is degenerate: {reason}", self.kind(), points.len());
        }
        self.model = model;
    }

    /// Evaluate the active model at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.model.evaluate(x)
    }

    /// Selected kind.
    #[inline]
    pub fn kind(&self) -> RegressionKind {
        self.model.kind()
    }

    /// Current fit.
    #[inline]
    pub fn model(&self) -> &ActiveModel<T> {
        &self.model
    }

    /// The current fit fell back to its default model.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.model.degeneracy().is_some()
    }

    /// Sample the curve at `segments + 1` evenly spaced x-values across `bounds`.
    pub fn sample_curve(&self, bounds: &Bounds<T>, segments: usize) -> Vec<Point<T>> {
        let steps = T::from(segments.max(1)).unwrap_or_else(T::one);
        let span = bounds.max_x - bounds.min_x;

        (0..=segments.max(1))
            .map(|i| {
                let t = T::from(i).unwrap_or_else(T::zero) / steps;
                let x = bounds.min_x + t * span;
                Point::new(x, self.evaluate(x))
            })
            .collect()
    }
}

impl<T: Float> Curve<T> for ModelState<T> {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        self.model.evaluate(x)
    }
}
