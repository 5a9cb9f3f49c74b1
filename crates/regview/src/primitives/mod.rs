//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data types shared by every other layer: sample
//! points, the ordered point store, and the error type. It has zero internal
//! dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Sample points.
pub mod point;

/// Ordered point storage.
pub mod store;

/// Shared error types.
pub mod errors;
