//! Affine mapping between data space and the rendering surface.
//!
//! ## Purpose
//!
//! This module converts data coordinates into pixel coordinates and back.
//! The visible data window comes from [`Bounds`]; the target is a surface of
//! arbitrary size with fixed margins reserved around the plot area.
//!
//! ## Design notes
//!
//! * **Axis orientation**: Data y grows upward, surface y grows downward, so
//!   the vertical mapping is inverted.
//! * **Degenerate ranges**: A zero-width data range is scaled as if it were
//!   1.0, and a surface smaller than its margins uses a 1px plot area. No
//!   Infinity or NaN is produced for finite input.
//!
//! ## Key concepts
//!
//! ```text
//! sx = left + (x - min_x) / range_x * plot_w
//! sy = height - bottom - (y - min_y) / range_y * plot_h
//! ```
//!
//! ## Invariants
//!
//! * `to_data(to_screen(x, y)) == (x, y)` up to float round-off, for the same
//!   bounds and surface size.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::bounds::Bounds;
use crate::primitives::point::Point;
use crate::primitives::store::ScreenProjection;

// ============================================================================
// Margins
// ============================================================================

/// Pixels reserved on each side of the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins<T> {
    /// Left margin.
    pub left: T,
    /// Right margin.
    pub right: T,
    /// Top margin (room for the input prompt and hints).
    pub top: T,
    /// Bottom margin.
    pub bottom: T,
}

impl<T: Float> Margins<T> {
    /// Default side margin in pixels.
    pub const SIDE: f64 = 50.0;

    /// Default top margin in pixels.
    pub const TOP: f64 = 170.0;

    /// Explicit margins.
    pub fn new(left: T, right: T, top: T, bottom: T) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// The same margin on every side.
    pub fn uniform(margin: T) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl<T: Float> Default for Margins<T> {
    fn default() -> Self {
        let side = T::from(Self::SIDE).unwrap_or_else(T::zero);
        let top = T::from(Self::TOP).unwrap_or_else(T::zero);
        Self::new(side, side, top, side)
    }
}

// ============================================================================
// Axes
// ============================================================================

/// Screen-space endpoints of the coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes<T> {
    /// Start of the x axis, at `(min_x, 0)`.
    pub x_start: (T, T),
    /// End of the x axis, at `(max_x, 0)`.
    pub x_end: (T, T),
    /// Start of the y axis, at `(0, min_y)`.
    pub y_start: (T, T),
    /// End of the y axis, at `(0, max_y)`.
    pub y_end: (T, T),
}

// ============================================================================
// Coordinate Mapper
// ============================================================================

/// Bidirectional data ↔ surface transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper<T> {
    bounds: Bounds<T>,
    width: T,
    height: T,
    margins: Margins<T>,
}

impl<T: Float> CoordinateMapper<T> {
    /// Create a mapper for `bounds` on a `width × height` surface.
    pub fn new(bounds: Bounds<T>, width: T, height: T, margins: Margins<T>) -> Self {
        Self {
            bounds,
            width,
            height,
            margins,
        }
    }

    /// Change the surface size.
    pub fn resize(&mut self, width: T, height: T) {
        self.width = width;
        self.height = height;
    }

    /// Change the visible data window.
    pub fn set_bounds(&mut self, bounds: Bounds<T>) {
        self.bounds = bounds;
    }

    /// Current data window.
    #[inline]
    pub fn bounds(&self) -> &Bounds<T> {
        &self.bounds
    }

    /// Current surface size as `(width, height)`.
    #[inline]
    pub fn size(&self) -> (T, T) {
        (self.width, self.height)
    }

    /// Current margins.
    #[inline]
    pub fn margins(&self) -> &Margins<T> {
        &self.margins
    }

    /// Width of the plot area in pixels (at least 1).
    pub fn plot_width(&self) -> T {
        Self::usable(self.width - self.margins.left - self.margins.right)
    }

    /// Height of the plot area in pixels (at least 1).
    pub fn plot_height(&self) -> T {
        Self::usable(self.height - self.margins.top - self.margins.bottom)
    }

    /// Map data coordinates to surface pixels.
    pub fn to_screen(&self, x: T, y: T) -> (T, T) {
        let b = &self.bounds;
        let sx = self.margins.left + (x - b.min_x) / b.x_range() * self.plot_width();
        let sy = self.height
            - self.margins.bottom
            - (y - b.min_y) / b.y_range() * self.plot_height();
        (sx, sy)
    }

    /// Map surface pixels back to data coordinates.
    pub fn to_data(&self, sx: T, sy: T) -> (T, T) {
        let b = &self.bounds;
        let x = b.min_x + (sx - self.margins.left) / self.plot_width() * b.x_range();
        let norm_y = (self.height - self.margins.bottom - sy) / self.plot_height();
        let y = b.min_y + norm_y * b.y_range();
        (x, y)
    }

    /// Screen endpoints of the x and y axes through the data origin.
    pub fn axes(&self) -> Axes<T> {
        let b = &self.bounds;
        let zero = T::zero();
        Axes {
            x_start: self.to_screen(b.min_x, zero),
            x_end: self.to_screen(b.max_x, zero),
            y_start: self.to_screen(zero, b.min_y),
            y_end: self.to_screen(zero, b.max_y),
        }
    }

    #[inline]
    fn usable(extent: T) -> T {
        if extent.is_finite() && extent >= T::one() {
            extent
        } else {
            T::one()
        }
    }
}

impl<T: Float> ScreenProjection<T> for CoordinateMapper<T> {
    #[inline]
    fn project(&self, point: &Point<T>) -> (T, T) {
        self.to_screen(point.x, point.y)
    }
}
