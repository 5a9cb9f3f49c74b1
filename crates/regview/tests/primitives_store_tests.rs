//! Tests for the ordered point store.
//!
//! These tests verify:
//! - Insertion order and index removal
//! - Nearest-point search in screen space
//! - Threshold-based removal and tie-breaking
//!
//! ## Test Organization
//!
//! 1. **Basic Operations** - Add, replace, remove, iterate
//! 2. **Nearest Search** - Distances, ties, empty store
//! 3. **Threshold Removal** - Inside/outside the radius

use approx::assert_relative_eq;

use regview::internals::primitives::point::Point;
use regview::internals::primitives::store::{PointStore, ScreenProjection};

// ============================================================================
// Helper Functions
// ============================================================================

/// Projection that draws data coordinates 1:1 as pixels.
struct Identity;

impl ScreenProjection<f64> for Identity {
    fn project(&self, point: &Point<f64>) -> (f64, f64) {
        (point.x, point.y)
    }
}

/// Points at 5, 15 and 25 px to the right of the origin.
fn row_store() -> PointStore<f64> {
    PointStore::from_points(vec![
        Point::new(5.0, 0.0),
        Point::new(15.0, 0.0),
        Point::new(25.0, 0.0),
    ])
}

// ============================================================================
// Basic Operation Tests
// ============================================================================

/// Test that points keep insertion order.
#[test]
fn test_insertion_order() {
    let mut store = PointStore::new();
    store.add_point(Point::new(3.0, 1.0));
    store.add_point(Point::new(1.0, 2.0));
    store.add_point(Point::new(2.0, 3.0));

    let xs: Vec<f64> = store.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
    assert_eq!((&store).into_iter().count(), 3);
}

/// Test removal by index preserves the relative order of the rest.
#[test]
fn test_remove_by_index() {
    let mut store = row_store();

    assert_eq!(store.remove(1), Some(Point::new(15.0, 0.0)));
    assert_eq!(store.points(), &[Point::new(5.0, 0.0), Point::new(25.0, 0.0)]);
    assert_eq!(store.remove(7), None);
}

/// Test wholesale replacement.
#[test]
fn test_replace() {
    let mut store = row_store();
    store.replace(vec![Point::new(-1.0, -1.0)]);

    assert_eq!(store.len(), 1);
    assert_eq!(store.into_points(), vec![Point::new(-1.0, -1.0)]);
}

// ============================================================================
// Nearest Search Tests
// ============================================================================

/// Test the nearest index and its pixel distance.
#[test]
fn test_nearest() {
    let store = row_store();
    let (index, dist) = store.nearest((14.0, 3.0), &Identity).expect("non-empty");

    assert_eq!(index, 1);
    assert_relative_eq!(dist, 10.0_f64.sqrt());
}

/// Test that an empty store has no nearest point.
#[test]
fn test_nearest_empty() {
    let store = PointStore::<f64>::new();
    assert!(store.nearest((0.0, 0.0), &Identity).is_none());
}

/// Test that the lowest index wins a tie.
#[test]
fn test_nearest_tie_lowest_index() {
    let store = PointStore::from_points(vec![
        Point::new(-10.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
    ]);

    let (index, _) = store.nearest((0.0, 0.0), &Identity).expect("non-empty");
    assert_eq!(index, 0);
}

// ============================================================================
// Threshold Removal Tests
// ============================================================================

/// Test removal near the origin with a 10 px radius.
///
/// Verifies only the point 5 px away is removed.
#[test]
fn test_remove_nearest_within_threshold() {
    let mut store = row_store();
    let removed = store.remove_nearest((0.0, 0.0), &Identity, 10.0);

    assert_eq!(removed, Some((0, Point::new(5.0, 0.0))));
    assert_eq!(store.points(), &[Point::new(15.0, 0.0), Point::new(25.0, 0.0)]);
}

/// Test that a 3 px radius removes nothing.
#[test]
fn test_remove_nearest_outside_threshold() {
    let mut store = row_store();

    assert_eq!(store.remove_nearest((0.0, 0.0), &Identity, 3.0), None);
    assert_eq!(store.len(), 3);
}

/// Test that a point exactly on the radius is kept.
#[test]
fn test_remove_nearest_on_boundary() {
    let mut store = row_store();

    assert_eq!(store.remove_nearest((0.0, 0.0), &Identity, 5.0), None);
    assert_eq!(store.len(), 3);
}

/// Test removal from an empty store.
#[test]
fn test_remove_nearest_empty() {
    let mut store = PointStore::<f64>::new();
    assert_eq!(store.remove_nearest((0.0, 0.0), &Identity, 10.0), None);
}
