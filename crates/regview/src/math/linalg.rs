//! Dense 3×3 linear algebra in double precision.
//!
//! ## Purpose
//!
//! This module solves the small normal-equation systems produced by the
//! quadratic solver. A 3×3 system is cheap enough to solve by cofactor
//! determinants (Cramer's rule), which keeps the crate free of a general
//! linear algebra dependency.
//!
//! ## Design notes
//!
//! * Always `f64`: callers narrow the solution to their own precision.
//! * Singularity is an absolute determinant threshold, matching the
//!   magnitudes produced by power sums of screen-scale data.
//!
//! ## Invariants
//!
//! * [`Matrix3::solve_cramer`] never returns non-finite components.

/// Row-major 3×3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Build a matrix from its rows.
    #[inline]
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Copy of the matrix with column `col` replaced by `values`.
    pub fn with_column(&self, col: usize, values: [f64; 3]) -> Self {
        let mut rows = self.rows;
        for (row, v) in rows.iter_mut().zip(values) {
            row[col] = v;
        }
        Self { rows }
    }

    /// Solve `self · s = rhs` by Cramer's rule.
    ///
    /// Returns `None` when `|det| < tolerance` or when the quotients are not
    /// finite.
    pub fn solve_cramer(&self, rhs: [f64; 3], tolerance: f64) -> Option<[f64; 3]> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < tolerance {
            return None;
        }

        let mut solution = [0.0; 3];
        for (col, s) in solution.iter_mut().enumerate() {
            *s = self.with_column(col, rhs).determinant() / det;
        }

        solution.iter().all(|s| s.is_finite()).then_some(solution)
    }
}
