//! High-level API for interactive regression sessions.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the session (regression kind, surface,
//! margins, thresholds) and the initial point set.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Validated**: The resolved configuration and the points are validated
//!   when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegressionViewBuilder`] via `RegressionView::new()`.
//! 2. Chain configuration methods (`.kind()`, `.surface()`, etc.).
//! 3. Call `.build()` to get a [`RegressionSession`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::point::Point;

// Publicly re-exported types
pub use crate::engine::output::{FitSummary, Scene, ScenePoint};
pub use crate::engine::session::{Action, Outcome, RegressionSession, SessionConfig};
pub use crate::engine::state::RegressionKind;
pub use crate::math::mapping::Margins;
pub use crate::primitives::errors::RegressionError;

/// Fluent builder for configuring a regression session.
#[derive(Debug, Clone)]
pub struct RegressionViewBuilder<T> {
    /// Initially selected regression kind.
    pub kind: Option<RegressionKind>,

    /// Padding around the point extents (data units).
    pub padding: Option<T>,

    /// Plot margins (pixels).
    pub margins: Option<Margins<T>>,

    /// Surface size as `(width, height)` in pixels.
    pub surface: Option<(T, T)>,

    /// Nearest-point removal radius (pixels).
    pub removal_threshold: Option<T>,

    /// Residual above which a point is an outlier.
    pub outlier_threshold: Option<T>,

    /// Number of segments in the sampled curve.
    pub curve_segments: Option<usize>,

    /// Initial point set.
    pub points: Option<Vec<Point<T>>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RegressionViewBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RegressionViewBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            kind: None,
            padding: None,
            margins: None,
            surface: None,
            removal_threshold: None,
            outlier_threshold: None,
            curve_segments: None,
            points: None,
            duplicate_param: None,
        }
    }

    /// Set the initial regression kind.
    pub fn kind(mut self, kind: RegressionKind) -> Self {
        if self.kind.is_some() {
            self.duplicate_param = Some("kind");
        }
        self.kind = Some(kind);
        self
    }

    /// Set the padding added around the point extents.
    pub fn padding(mut self, padding: T) -> Self {
        if self.padding.is_some() {
            self.duplicate_param = Some("padding");
        }
        self.padding = Some(padding);
        self
    }

    /// Set the plot margins.
    pub fn margins(mut self, margins: Margins<T>) -> Self {
        if self.margins.is_some() {
            self.duplicate_param = Some("margins");
        }
        self.margins = Some(margins);
        self
    }

    /// Set the rendering surface size in pixels.
    pub fn surface(mut self, width: T, height: T) -> Self {
        if self.surface.is_some() {
            self.duplicate_param = Some("surface");
        }
        self.surface = Some((width, height));
        self
    }

    /// Set the pixel radius for nearest-point removal.
    pub fn removal_threshold(mut self, threshold: T) -> Self {
        if self.removal_threshold.is_some() {
            self.duplicate_param = Some("removal_threshold");
        }
        self.removal_threshold = Some(threshold);
        self
    }

    /// Set the residual threshold for outlier highlighting.
    pub fn outlier_threshold(mut self, threshold: T) -> Self {
        if self.outlier_threshold.is_some() {
            self.duplicate_param = Some("outlier_threshold");
        }
        self.outlier_threshold = Some(threshold);
        self
    }

    /// Set the number of curve segments drawn per frame.
    pub fn curve_segments(mut self, segments: usize) -> Self {
        if self.curve_segments.is_some() {
            self.duplicate_param = Some("curve_segments");
        }
        self.curve_segments = Some(segments);
        self
    }

    /// Set the initial points.
    pub fn points<P>(mut self, points: impl IntoIterator<Item = P>) -> Self
    where
        P: Into<Point<T>>,
    {
        if self.points.is_some() {
            self.duplicate_param = Some("points");
        }
        self.points = Some(points.into_iter().map(Into::into).collect());
        self
    }

    /// Resolve the configuration with defaults filled in.
    pub fn config(&self) -> SessionConfig<T> {
        let defaults = SessionConfig::default();
        let (width, height) = self.surface.unwrap_or((defaults.width, defaults.height));

        SessionConfig {
            kind: self.kind.unwrap_or(defaults.kind),
            padding: self.padding.unwrap_or(defaults.padding),
            margins: self.margins.unwrap_or(defaults.margins),
            width,
            height,
            removal_threshold: self.removal_threshold.unwrap_or(defaults.removal_threshold),
            outlier_threshold: self.outlier_threshold.unwrap_or(defaults.outlier_threshold),
            curve_segments: self.curve_segments.unwrap_or(defaults.curve_segments),
        }
    }

    /// Validate the configuration and create the session.
    pub fn build(self) -> Result<RegressionSession<T>, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = self.config();
        RegressionSession::new(config, self.points.unwrap_or_default())
    }
}
