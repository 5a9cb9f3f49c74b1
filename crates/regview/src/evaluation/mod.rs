//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer inspects a fitted curve against the data and the user:
//! - Residuals and outlier flags for point highlighting
//! - Goodness-of-fit diagnostics
//! - X-input parsing and predictions
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residuals and outliers.
pub mod residuals;

/// Fit diagnostics.
pub mod diagnostics;

/// X-input predictions.
pub mod prediction;
