//! Ordered point storage with screen-space hit testing.
//!
//! ## Purpose
//!
//! This module owns the user-editable point set. Points are appended in
//! insertion order, replaced wholesale on load, and removed by proximity to
//! a pixel position on the rendering surface.
//!
//! ## Design notes
//!
//! * **Projection seam**: Nearest-point removal is expressed against the
//!   [`ScreenProjection`] trait so the store does not depend on a concrete
//!   coordinate mapper.
//! * **Stable ties**: The nearest search uses a strict `<` comparison, so the
//!   lowest index wins when two points are equally close.
//!
//! ## Invariants
//!
//! * Order is insertion order; removal preserves the relative order of the
//!   remaining points.
//! * The store never reorders points for computation.
//!
//! ## Non-goals
//!
//! * This module does not recompute models or bounds (the session does).
//! * File I/O lives in the CSV adapter.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice::Iter;
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Point;

// ============================================================================
// Screen Projection
// ============================================================================

/// Anything that can place a data-space point on the rendering surface.
pub trait ScreenProjection<T> {
    /// Pixel position of `point`.
    fn project(&self, point: &Point<T>) -> (T, T);
}

// ============================================================================
// Point Store
// ============================================================================

/// Ordered collection of data points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointStore<T> {
    points: Vec<Point<T>>,
}

impl<T: Float> PointStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a store holding `points` in the given order.
    pub fn from_points(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// Append a point at the end.
    pub fn add_point(&mut self, point: Point<T>) {
        self.points.push(point);
    }

    /// Replace the whole point set.
    pub fn replace(&mut self, points: Vec<Point<T>>) {
        self.points = points;
    }

    /// Remove and return the point at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<Point<T>> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Index and pixel distance of the point closest to `query`.
    ///
    /// Returns `None` for an empty store.
    pub fn nearest<P>(&self, query: (T, T), projection: &P) -> Option<(usize, T)>
    where
        P: ScreenProjection<T>,
    {
        let mut best: Option<(usize, T)> = None;

        for (i, p) in self.points.iter().enumerate() {
            let dist = Point::from(projection.project(p)).distance(&Point::from(query));
            match best {
                Some((_, best_dist)) if dist < best_dist => best = Some((i, dist)),
                None => best = Some((i, dist)),
                _ => {}
            }
        }

        best
    }

    /// Remove the point nearest to `query` if it lies closer than `threshold_px`.
    ///
    /// Returns the removed index and point, or `None` when nothing was within
    /// range (including an empty store).
    pub fn remove_nearest<P>(
        &mut self,
        query: (T, T),
        projection: &P,
        threshold_px: T,
    ) -> Option<(usize, Point<T>)>
    where
        P: ScreenProjection<T>,
    {
        let (index, dist) = self.nearest(query, projection)?;
        if dist < threshold_px {
            self.remove(index).map(|p| (index, p))
        } else {
            None
        }
    }

    /// Stored points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Consume the store, returning its points.
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }

    /// Number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The store holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> Iter<'_, Point<T>> {
        self.points.iter()
    }
}

impl<'a, T> IntoIterator for &'a PointStore<T> {
    type Item = &'a Point<T>;
    type IntoIter = Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
