//! Data-space sample points.
//!
//! A [`Point`] is a plain `(x, y)` pair generic over the float type. Points
//! carry no identity: two points with equal coordinates are interchangeable,
//! and the store addresses them by index.

// External dependencies
use num_traits::Float;

/// A single `(x, y)` sample in data space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T> {
    /// Independent variable.
    pub x: T,

    /// Dependent variable.
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Create a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (no NaN or infinity).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}
