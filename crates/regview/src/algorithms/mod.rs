//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the two closed-form regression solvers and the fit
//! outcome type they share:
//! - Ordinary least-squares line
//! - Least-squares parabola via 3×3 normal equations
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit outcomes and the `Curve` trait.
pub mod fit;

/// Linear least squares.
pub mod linear;

/// Quadratic least squares.
pub mod quadratic;
