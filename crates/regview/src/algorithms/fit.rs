//! Fit outcomes and the curve evaluation seam.
//!
//! ## Purpose
//!
//! Both solvers always produce a usable model. When the input cannot pin
//! down a unique solution the model falls back to a defined default (zeros,
//! or a flat line), and the outcome records why so callers can tell a
//! genuine flat fit from a fallback.
//!
//! ## Key concepts
//!
//! * **Fitted**: the closed-form solution exists and is finite.
//! * **Degenerate**: too few points, zero x-variance, a singular normal
//!   matrix, or sums that overflow the float type. The carried model is
//!   still renderable.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Curve Trait
// ============================================================================

/// A function `y = f(x)` that can be drawn and queried.
pub trait Curve<T> {
    /// Evaluate the curve at `x`.
    fn evaluate(&self, x: T) -> T;
}

// ============================================================================
// Degeneracy
// ============================================================================

/// Reason a fit fell back to its default model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Fewer points than the model has to determine.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum number of points for this model.
        min: usize,
    },

    /// All x-values coincide, so the slope is undetermined.
    ZeroVariance,

    /// The normal-equation matrix is (numerically) singular.
    Singular,

    /// Intermediate sums left the finite range of the float type.
    Overflow,
}

impl Display for Degeneracy {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::TooFewPoints { got, min } => {
                write!(f, "too few points (got {got}, need at least {min})")
            }
            Self::ZeroVariance => write!(f, "zero variance in x"),
            Self::Singular => write!(f, "singular normal equations"),
            Self::Overflow => write!(f, "sums overflow the float range"),
        }
    }
}

// ============================================================================
// Fit Outcome
// ============================================================================

/// Result of a closed-form fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fit<M> {
    /// A unique, finite least-squares solution.
    Fitted(M),

    /// The default model used when no unique solution exists.
    Degenerate {
        /// Fallback model.
        model: M,
        /// Why the fallback was used.
        reason: Degeneracy,
    },
}

impl<M: Copy> Fit<M> {
    /// The model to evaluate, fitted or fallback.
    #[inline]
    pub fn model(&self) -> M {
        match self {
            Self::Fitted(model) | Self::Degenerate { model, .. } => *model,
        }
    }

    /// The fit fell back to its default model.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }

    /// Why the fit is degenerate, if it is.
    #[inline]
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match self {
            Self::Fitted(_) => None,
            Self::Degenerate { reason, .. } => Some(*reason),
        }
    }
}

impl<T, M: Curve<T>> Curve<T> for Fit<M> {
    fn evaluate(&self, x: T) -> T {
        match self {
            Self::Fitted(model) | Self::Degenerate { model, .. } => model.evaluate(x),
        }
    }
}
