//! Tests for the 3×3 linear algebra used by the quadratic solver.
//!
//! ## Test Organization
//!
//! 1. **Determinant** - Identity, known values, singular matrices
//! 2. **Cramer's Rule** - Solutions, tolerance, column substitution

use approx::assert_relative_eq;

use regview::internals::math::linalg::Matrix3;

// ============================================================================
// Determinant Tests
// ============================================================================

/// Test the determinant of the identity and a known matrix.
#[test]
fn test_determinant_known_values() {
    let identity = Matrix3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_eq!(identity.determinant(), 1.0);

    let m = Matrix3::new([[2.0, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]]);
    assert_relative_eq!(m.determinant(), 49.0, epsilon = 1e-12);
}

/// Test that linearly dependent rows give a zero determinant.
#[test]
fn test_determinant_singular() {
    let m = Matrix3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
    assert_eq!(m.determinant(), 0.0);
}

// ============================================================================
// Cramer's Rule Tests
// ============================================================================

/// Test column substitution leaves the original untouched.
#[test]
fn test_with_column() {
    let m = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let replaced = m.with_column(1, [-1.0, -2.0, -3.0]);

    assert_eq!(replaced.get(0, 1), -1.0);
    assert_eq!(replaced.get(2, 1), -3.0);
    assert_eq!(replaced.get(2, 2), 9.0);
    assert_eq!(m.get(0, 1), 2.0);
}

/// Test a regular system is solved exactly.
#[test]
fn test_solve_regular_system() {
    // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27
    let m = Matrix3::new([[1.0, 1.0, 1.0], [0.0, 2.0, 5.0], [2.0, 5.0, -1.0]]);
    let s = m.solve_cramer([6.0, -4.0, 27.0], 1e-12).expect("regular system");

    assert_relative_eq!(s[0], 5.0, epsilon = 1e-12);
    assert_relative_eq!(s[1], 3.0, epsilon = 1e-12);
    assert_relative_eq!(s[2], -2.0, epsilon = 1e-12);
}

/// Test that a determinant below the tolerance is rejected.
#[test]
fn test_solve_below_tolerance() {
    let m = Matrix3::new([[1e-5, 0.0, 0.0], [0.0, 1e-5, 0.0], [0.0, 0.0, 1e-5]]);

    assert!(m.solve_cramer([1.0, 1.0, 1.0], 1e-12).is_none());
    assert!(m.solve_cramer([1.0, 1.0, 1.0], 1e-16).is_some());
}

/// Test that non-finite entries never produce a solution.
#[test]
fn test_solve_non_finite() {
    let m = Matrix3::new([[f64::NAN, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    assert!(m.solve_cramer([1.0, 1.0, 1.0], 1e-12).is_none());
}
