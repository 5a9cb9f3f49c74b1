//! Session state and the mutation dispatch path.
//!
//! ## Purpose
//!
//! A [`RegressionSession`] owns the point store, the model state, the bounds
//! and the coordinate mapper, and keeps them consistent. Every user action
//! enters through [`RegressionSession::dispatch`], which applies the
//! mutation and then recomputes the dependent state before returning.
//!
//! ## Design notes
//!
//! * **Single path**: Adding, removing, loading, switching kind and resizing
//!   are all [`Action`] values handled by one `dispatch` method.
//! * **Ordered refresh**: After a point mutation the order is always
//!   bounds → model → mapper.
//! * **Validated**: Non-finite points or pixel positions are rejected before
//!   any state changes.
//!
//! ## Invariants
//!
//! * After `dispatch` returns, the model was fitted to the current points
//!   and the mapper uses the bounds of the current points.
//! * A failed `dispatch` leaves the session unchanged.
//!
//! ## Non-goals
//!
//! * No undo history.
//! * No rendering; callers draw from [`Scene`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::Display;
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::output::{FitSummary, Scene, ScenePoint};
use crate::engine::state::{ModelState, RegressionKind};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::prediction::Prediction;
use crate::evaluation::residuals::{flag_outliers, residuals, DEFAULT_OUTLIER_THRESHOLD};
use crate::math::bounds::{Bounds, DEFAULT_PADDING};
use crate::math::mapping::{CoordinateMapper, Margins};
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;
use crate::primitives::store::PointStore;

// ============================================================================
// Configuration
// ============================================================================

/// Default surface width in pixels.
pub const DEFAULT_WIDTH: f64 = 800.0;

/// Default surface height in pixels.
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Default nearest-point removal radius in pixels.
pub const DEFAULT_REMOVAL_THRESHOLD: f64 = 10.0;

/// Default number of curve segments per frame.
pub const DEFAULT_CURVE_SEGMENTS: usize = 200;

/// Resolved session configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig<T> {
    /// Initially selected regression kind.
    pub kind: RegressionKind,

    /// Padding around the point extents, in data units.
    pub padding: T,

    /// Plot margins in pixels.
    pub margins: Margins<T>,

    /// Surface width in pixels.
    pub width: T,

    /// Surface height in pixels.
    pub height: T,

    /// Maximum pixel distance for nearest-point removal.
    pub removal_threshold: T,

    /// Residual above which a point is highlighted.
    pub outlier_threshold: T,

    /// Number of segments in the sampled curve.
    pub curve_segments: usize,
}

impl<T: Float> Default for SessionConfig<T> {
    fn default() -> Self {
        let cast = |v: f64| T::from(v).unwrap_or_else(T::one);
        Self {
            kind: RegressionKind::default(),
            padding: cast(DEFAULT_PADDING),
            margins: Margins::default(),
            width: cast(DEFAULT_WIDTH),
            height: cast(DEFAULT_HEIGHT),
            removal_threshold: cast(DEFAULT_REMOVAL_THRESHOLD),
            outlier_threshold: cast(DEFAULT_OUTLIER_THRESHOLD),
            curve_segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

impl<T: Float> SessionConfig<T> {
    /// Check every field.
    pub fn validate(&self) -> Result<(), RegressionError> {
        Validator::validate_padding(self.padding)?;
        Validator::validate_margins(&self.margins)?;
        Validator::validate_surface(self.width, self.height)?;
        Validator::validate_threshold(self.removal_threshold, "removal_threshold")?;
        Validator::validate_threshold(self.outlier_threshold, "outlier_threshold")?;
        Validator::validate_segments(self.curve_segments)
    }
}

// ============================================================================
// Actions
// ============================================================================

/// A user action that mutates the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    /// Append a data-space point.
    AddPoint(Point<T>),

    /// Append the data-space point under a pixel position.
    AddAtScreen {
        /// Pixel x.
        sx: T,
        /// Pixel y.
        sy: T,
    },

    /// Remove the point nearest to a pixel position, if close enough.
    RemoveNearest {
        /// Pixel x.
        sx: T,
        /// Pixel y.
        sy: T,
    },

    /// Switch the regression kind.
    SetKind(RegressionKind),

    /// Replace all points (e.g. after loading a file).
    ReplacePoints(Vec<Point<T>>),

    /// Resize the rendering surface.
    Resize {
        /// New width in pixels.
        width: T,
        /// New height in pixels.
        height: T,
    },
}

/// What a dispatched action changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<T> {
    /// A point was appended.
    Added(Point<T>),

    /// A point was removed.
    Removed {
        /// Former index of the removed point.
        index: usize,
        /// The removed point.
        point: Point<T>,
    },

    /// The point set was replaced; holds the new length.
    Replaced(usize),

    /// The regression kind changed.
    KindChanged(RegressionKind),

    /// The surface was resized.
    Resized,

    /// Nothing changed (no point within the removal radius).
    Unchanged,
}

// ============================================================================
// Session
// ============================================================================

/// Points, model, bounds and mapper kept in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionSession<T> {
    store: PointStore<T>,
    model: ModelState<T>,
    bounds: Bounds<T>,
    mapper: CoordinateMapper<T>,
    config: SessionConfig<T>,
}

impl<T: Float> RegressionSession<T> {
    /// Create a session over `points` with a validated configuration.
    pub fn new(config: SessionConfig<T>, points: Vec<Point<T>>) -> Result<Self, RegressionError> {
        config.validate()?;
        Validator::validate_points(&points)?;

        let bounds = Bounds::unit();
        let mut session = Self {
            store: PointStore::from_points(points),
            model: ModelState::new(config.kind),
            bounds,
            mapper: CoordinateMapper::new(bounds, config.width, config.height, config.margins),
            config,
        };
        session.refresh();
        Ok(session)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Apply `action` and bring the dependent state up to date.
    pub fn dispatch(&mut self, action: Action<T>) -> Result<Outcome<T>, RegressionError> {
        match action {
            Action::AddPoint(point) => {
                Validator::validate_point(&point)?;
                self.store.add_point(point);
                self.refresh();
                Ok(Outcome::Added(point))
            }
            Action::AddAtScreen { sx, sy } => {
                Validator::validate_scalar(sx, "sx")?;
                Validator::validate_scalar(sy, "sy")?;
                let point = Point::from(self.mapper.to_data(sx, sy));
                Validator::validate_point(&point)?;
                self.store.add_point(point);
                self.refresh();
                Ok(Outcome::Added(point))
            }
            Action::RemoveNearest { sx, sy } => {
                Validator::validate_scalar(sx, "sx")?;
                Validator::validate_scalar(sy, "sy")?;
                let removed =
                    self.store
                        .remove_nearest((sx, sy), &self.mapper, self.config.removal_threshold);
                match removed {
                    Some((index, point)) => {
                        self.refresh();
                        Ok(Outcome::Removed { index, point })
                    }
                    None => Ok(Outcome::Unchanged),
                }
            }
            Action::SetKind(kind) => {
                self.model.set_kind(kind, self.store.points());
                Ok(Outcome::KindChanged(kind))
            }
            Action::ReplacePoints(points) => {
                Validator::validate_points(&points)?;
                let n = points.len();
                self.store.replace(points);
                self.refresh();
                Ok(Outcome::Replaced(n))
            }
            Action::Resize { width, height } => {
                Validator::validate_surface(width, height)?;
                self.mapper.resize(width, height);
                Ok(Outcome::Resized)
            }
        }
    }

    /// Bounds → model → mapper, in that order.
    fn refresh(&mut self) {
        let points = self.store.points();
        self.bounds = Bounds::from_points(points, self.config.padding);
        self.model.recompute(points);
        self.mapper.set_bounds(self.bounds);
        debug!(
            "refreshed session: {} points, {} model{}",
            points.len(),
            self.model.kind(),
            if self.model.is_degenerate() { " (degenerate)" } else { "" }
        );
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Stored points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        self.store.points()
    }

    /// The point store.
    #[inline]
    pub fn store(&self) -> &PointStore<T> {
        &self.store
    }

    /// The model state.
    #[inline]
    pub fn model(&self) -> &ModelState<T> {
        &self.model
    }

    /// Active regression kind.
    #[inline]
    pub fn kind(&self) -> RegressionKind {
        self.model.kind()
    }

    /// Current data bounds.
    #[inline]
    pub fn bounds(&self) -> &Bounds<T> {
        &self.bounds
    }

    /// Current coordinate mapper.
    #[inline]
    pub fn mapper(&self) -> &CoordinateMapper<T> {
        &self.mapper
    }

    /// Session configuration.
    #[inline]
    pub fn config(&self) -> &SessionConfig<T> {
        &self.config
    }

    /// Evaluate the active model at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.model.evaluate(x)
    }

    /// Data → pixel coordinates.
    #[inline]
    pub fn to_screen(&self, x: T, y: T) -> (T, T) {
        self.mapper.to_screen(x, y)
    }

    /// Pixel → data coordinates.
    #[inline]
    pub fn to_data(&self, sx: T, sy: T) -> (T, T) {
        self.mapper.to_data(sx, sy)
    }

    /// Prediction for a user-entered X.
    pub fn predict(&self, input: &str) -> Prediction<T> {
        Prediction::from_input(input, &self.model)
    }

    /// Outlier flag for every point.
    pub fn outliers(&self) -> Vec<bool> {
        flag_outliers(self.points(), &self.model, self.config.outlier_threshold)
    }

    /// Goodness-of-fit of the active model.
    pub fn diagnostics(&self) -> Diagnostics<T> {
        Diagnostics::compute(self.points(), &self.model)
    }

    /// Render-ready snapshot for one frame.
    pub fn scene(&self) -> Scene<T> {
        let curve = if self.store.is_empty() {
            Vec::new()
        } else {
            self.model
                .sample_curve(&self.bounds, self.config.curve_segments)
                .into_iter()
                .map(|p| self.mapper.to_screen(p.x, p.y))
                .collect()
        };

        let points = self
            .points()
            .iter()
            .zip(self.outliers())
            .map(|(p, outlier)| ScenePoint {
                data: *p,
                screen: self.mapper.to_screen(p.x, p.y),
                outlier,
            })
            .collect();

        Scene {
            kind: self.kind(),
            curve,
            points,
            axes: self.mapper.axes(),
        }
    }

    /// Current fit with per-point residuals and diagnostics.
    pub fn summary(&self) -> FitSummary<T> {
        let points = self.points().to_vec();
        let fitted = points.iter().map(|p| self.model.evaluate(p.x)).collect();
        FitSummary {
            model: *self.model.model(),
            residuals: residuals(&points, &self.model),
            outliers: self.outliers(),
            diagnostics: self.diagnostics(),
            fitted,
            points,
        }
    }
}

impl<T: Float + Display> RegressionSession<T> {
    /// Data coordinates under a pixel position, as `X=.., Y=..` with two decimals.
    pub fn cursor_label(&self, sx: T, sy: T) -> String {
        let (x, y) = self.mapper.to_data(sx, sy);
        format!("X={x:.2}, Y={y:.2}")
    }
}
