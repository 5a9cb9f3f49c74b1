//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer connects the core to the outside world. Currently that is the
//! two-column point file format used to load and save sessions; it requires
//! the `std` feature.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// CSV-style point files.
#[cfg(feature = "std")]
pub mod csv;
