//! Least-squares parabola fit.
//!
//! ## Purpose
//!
//! Fits `y = a·x² + b·x + c` by building the 3×3 normal equations from power
//! sums and solving them with Cramer's rule.
//!
//! ## Design notes
//!
//! * **Double precision**: Power sums up to `x⁴` lose digits quickly, so they
//!   are accumulated and solved in `f64` whatever the point type, and only
//!   the final coefficients are narrowed.
//! * **Fallback**: Fewer than three points or a determinant below
//!   [`SINGULAR_TOLERANCE`] give `{0, 0, 0}`, reported as degenerate.
//!
//! ## Key concepts
//!
//! ```text
//! | n    Sx   Sx2 |   | c |   | Sy   |
//! | Sx   Sx2  Sx3 | · | b | = | Sxy  |
//! | Sx2  Sx3  Sx4 |   | a |   | Sx2y |
//! ```
//!
//! ## Invariants
//!
//! * Returned coefficients are always finite.

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::{Curve, Degeneracy, Fit};
use crate::math::linalg::Matrix3;
use crate::primitives::point::Point;

/// Minimum number of points for a unique parabola.
pub const MIN_POINTS: usize = 3;

/// Absolute determinant below which the normal matrix counts as singular.
pub const SINGULAR_TOLERANCE: f64 = 1e-12;

// ============================================================================
// Quadratic Model
// ============================================================================

/// Parabola `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadraticModel<T> {
    /// Coefficient of `x²`.
    pub a: T,
    /// Coefficient of `x`.
    pub b: T,
    /// Constant term.
    pub c: T,
}

impl<T: Float> QuadraticModel<T> {
    /// Parabola with the given coefficients.
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// The `y = 0` curve.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }
}

impl<T: Float> Curve<T> for QuadraticModel<T> {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        self.a * x * x + self.b * x + self.c
    }
}

// ============================================================================
// Power Sums
// ============================================================================

/// Power sums feeding the normal equations, in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PowerSums {
    /// Number of points.
    pub n: f64,
    /// `Σx`
    pub sx: f64,
    /// `Σx²`
    pub sx2: f64,
    /// `Σx³`
    pub sx3: f64,
    /// `Σx⁴`
    pub sx4: f64,
    /// `Σy`
    pub sy: f64,
    /// `Σxy`
    pub sxy: f64,
    /// `Σx²y`
    pub sx2y: f64,
}

impl PowerSums {
    /// Accumulate the sums over `points`, widening each coordinate to `f64`.
    pub fn accumulate<T: Float>(points: &[Point<T>]) -> Self {
        let mut s = Self::default();
        for p in points {
            let x = p.x.to_f64().unwrap_or(f64::NAN);
            let y = p.y.to_f64().unwrap_or(f64::NAN);
            let x2 = x * x;

            s.n += 1.0;
            s.sx += x;
            s.sx2 += x2;
            s.sx3 += x2 * x;
            s.sx4 += x2 * x2;
            s.sy += y;
            s.sxy += x * y;
            s.sx2y += x2 * y;
        }
        s
    }

    /// Coefficient matrix of the normal equations (unknowns ordered `c, b, a`).
    pub fn normal_matrix(&self) -> Matrix3 {
        Matrix3::new([
            [self.n, self.sx, self.sx2],
            [self.sx, self.sx2, self.sx3],
            [self.sx2, self.sx3, self.sx4],
        ])
    }

    /// Right-hand side of the normal equations.
    pub fn rhs(&self) -> [f64; 3] {
        [self.sy, self.sxy, self.sx2y]
    }
}

// ============================================================================
// Quadratic Solver
// ============================================================================

/// Least-squares parabola fitter.
pub struct QuadraticSolver;

impl QuadraticSolver {
    /// Fit a least-squares parabola to `points`.
    pub fn fit<T: Float>(points: &[Point<T>]) -> Fit<QuadraticModel<T>> {
        if points.len() < MIN_POINTS {
            return Fit::Degenerate {
                model: QuadraticModel::zero(),
                reason: Degeneracy::TooFewPoints {
                    got: points.len(),
                    min: MIN_POINTS,
                },
            };
        }

        let sums = PowerSums::accumulate(points);
        let singular = Fit::Degenerate {
            model: QuadraticModel::zero(),
            reason: Degeneracy::Singular,
        };

        let Some([c, b, a]) = sums
            .normal_matrix()
            .solve_cramer(sums.rhs(), SINGULAR_TOLERANCE)
        else {
            debug!("quadratic fit: singular normal matrix for {} points", points.len());
            return singular;
        };

        match (T::from(a), T::from(b), T::from(c)) {
            (Some(a), Some(b), Some(c)) if a.is_finite() && b.is_finite() && c.is_finite() => {
                Fit::Fitted(QuadraticModel::new(a, b, c))
            }
            _ => {
                debug!("quadratic fit: coefficients overflow the model precision");
                singular
            }
        }
    }
}
