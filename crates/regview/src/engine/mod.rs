//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer keeps the point set, the active model and the coordinate
//! mapping consistent. It owns the single mutation path and assembles the
//! outputs the presentation shell draws from.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Active model state.
pub mod state;

/// Session and dispatch.
pub mod session;

/// Validation utilities.
pub mod validator;

/// Output types.
pub mod output;
