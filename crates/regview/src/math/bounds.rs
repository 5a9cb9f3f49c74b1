//! Padded data-space extents.
//!
//! ## Purpose
//!
//! This module derives the visible data window from the point set: the
//! min/max of each axis widened by a fixed padding so no point sits on the
//! edge of the plot.
//!
//! ## Design notes
//!
//! * **Empty default**: An empty set maps to the unit square `[-1, 1]²`,
//!   without padding.
//! * **Safe ranges**: [`Bounds::x_range`] and [`Bounds::y_range`] never
//!   return zero or a non-finite value, so divisions by the range are
//!   always defined.
//!
//! ## Invariants
//!
//! * `min_x <= max_x` and `min_y <= max_y` for bounds built from finite points.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Point;

/// Padding applied around the point extents, in data units.
pub const DEFAULT_PADDING: f64 = 1.0;

/// Axis-aligned data-space window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Left edge.
    pub min_x: T,
    /// Right edge.
    pub max_x: T,
    /// Bottom edge.
    pub min_y: T,
    /// Top edge.
    pub max_y: T,
}

impl<T: Float> Default for Bounds<T> {
    fn default() -> Self {
        Self::unit()
    }
}

impl<T: Float> Bounds<T> {
    /// Explicit bounds.
    pub fn new(min_x: T, max_x: T, min_y: T, max_y: T) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// The `[-1, 1] × [-1, 1]` window used for empty point sets.
    pub fn unit() -> Self {
        let one = T::one();
        Self::new(-one, one, -one, one)
    }

    /// Extents of `points` widened by `padding` on every side.
    pub fn from_points(points: &[Point<T>], padding: T) -> Self {
        let Some(first) = points.first() else {
            return Self::unit();
        };

        let mut b = Self::new(first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
        }

        b.min_x = b.min_x - padding;
        b.max_x = b.max_x + padding;
        b.min_y = b.min_y - padding;
        b.max_y = b.max_y + padding;
        b
    }

    /// Horizontal extent, or 1 when the extent is zero or not finite.
    #[inline]
    pub fn x_range(&self) -> T {
        Self::safe_range(self.max_x - self.min_x)
    }

    /// Vertical extent, or 1 when the extent is zero or not finite.
    #[inline]
    pub fn y_range(&self) -> T {
        Self::safe_range(self.max_y - self.min_y)
    }

    /// `(x, y)` lies inside the window (edges included).
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    #[inline]
    fn safe_range(range: T) -> T {
        if range.is_finite() && range != T::zero() {
            range
        } else {
            T::one()
        }
    }
}
