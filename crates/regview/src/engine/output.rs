//! Output types assembled from a session.
//!
//! ## Purpose
//!
//! This module defines what the session hands back to callers:
//! - [`Scene`]: everything a renderer needs for one frame, already in
//!   screen space.
//! - [`FitSummary`]: the current fit with per-point residuals and
//!   diagnostics, printable as a table.
//!
//! ## Design notes
//!
//! * **Snapshots**: Both types are plain owned data; they do not borrow the
//!   session and stay valid after further mutations.
//! * **Ergonomics**: `FitSummary` implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All per-point vectors have the same length and order as the point set.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::state::{ActiveModel, RegressionKind};
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::mapping::Axes;
use crate::primitives::point::Point;

// ============================================================================
// Scene
// ============================================================================

/// A point as drawn on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePoint<T> {
    /// Data-space position.
    pub data: Point<T>,

    /// Pixel position.
    pub screen: (T, T),

    /// Residual exceeds the outlier threshold.
    pub outlier: bool,
}

/// Render-ready snapshot of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<T> {
    /// Active regression kind.
    pub kind: RegressionKind,

    /// Curve polyline in pixels (empty when there are no points).
    pub curve: Vec<(T, T)>,

    /// Every stored point, in insertion order.
    pub points: Vec<ScenePoint<T>>,

    /// Coordinate axes in pixels.
    pub axes: Axes<T>,
}

impl<T> Scene<T> {
    /// Number of highlighted points.
    pub fn outlier_count(&self) -> usize {
        self.points.iter().filter(|p| p.outlier).count()
    }
}

// ============================================================================
// Fit Summary
// ============================================================================

/// Current fit with per-point detail.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSummary<T> {
    /// Fitted model of the active kind.
    pub model: ActiveModel<T>,

    /// Points the model was fitted to.
    pub points: Vec<Point<T>>,

    /// Model value at each point's x.
    pub fitted: Vec<T>,

    /// Residuals `y - fitted`.
    pub residuals: Vec<T>,

    /// Outlier flag for each point.
    pub outliers: Vec<bool>,

    /// Goodness-of-fit metrics.
    pub diagnostics: Diagnostics<T>,
}

impl<T: Float> FitSummary<T> {
    /// Active regression kind.
    pub fn kind(&self) -> RegressionKind {
        self.model.kind()
    }

    /// Number of highlighted points.
    pub fn outlier_count(&self) -> usize {
        self.outliers.iter().filter(|&&o| o).count()
    }
}

impl<T: Float + Display + Debug> Display for FitSummary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Regression:  {}", self.kind())?;
        writeln!(f, "  Model:       {}", self.model)?;
        writeln!(f, "  Data points: {}", self.points.len())?;
        if let Some(reason) = self.model.degeneracy() {
            writeln!(f, "  Degenerate:  {}", reason)?;
        }
        writeln!(f, "  Outliers:    {}", self.outlier_count())?;
        writeln!(f)?;
        writeln!(f, "{}", self.diagnostics)?;
        writeln!(f)?;

        writeln!(f, "Points:")?;
        writeln!(
            f,
            "{:>10} {:>12} {:>12} {:>12} {:>8}",
            "X", "Y", "Fitted", "Residual", "Outlier"
        )?;
        writeln!(f, "{:-<width$}", "", width = 58)?;

        // Show first 10 and last 10 if more than 20 points
        let n = self.points.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            let p = &self.points[idx];
            writeln!(
                f,
                "{:>10.3} {:>12.6} {:>12.6} {:>12.6} {:>8}",
                p.x,
                p.y,
                self.fitted[idx],
                self.residuals[idx],
                if self.outliers[idx] { "*" } else { "" }
            )?;
        }

        Ok(())
    }
}
