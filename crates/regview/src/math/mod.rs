//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - 3×3 determinants and Cramer's rule
//! - Padded data bounds
//! - The data ↔ surface coordinate transform
//!
//! None of these know which regression model is active.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Small dense linear algebra.
pub mod linalg;

/// Padded data-space bounds.
pub mod bounds;

/// Coordinate mapping.
pub mod mapping;
