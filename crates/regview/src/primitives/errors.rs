//! Error types for regression view operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can surface from the
//! regression core: configuration problems caught by the validator,
//! non-finite point data, unparsable user input, and file I/O failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value or parameter name.
//! * **Deferred**: Builder misuse (duplicate parameters) is recorded and
//!   reported when `build()` is called.
//! * **No-std**: Dynamic messages use `alloc::string::String`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Configuration validation**: surface size, margins, padding, thresholds.
//! 2. **Data validation**: points must be finite.
//! 3. **Input parsing**: user X input that is not a finite number.
//! 4. **Resources**: data files that cannot be read or written.
//!
//! ## Non-goals
//!
//! * Degenerate fits are not errors; they are reported through
//!   [`Fit::Degenerate`](crate::algorithms::fit::Fit).
//! * Malformed CSV records are skipped, never reported here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for regression view operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// User-supplied text could not be parsed as a finite number.
    InvalidInput(String),

    /// A point or scalar contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Rendering surface dimensions must be positive and finite.
    InvalidSurface {
        /// Requested surface width in pixels.
        width: f64,
        /// Requested surface height in pixels.
        height: f64,
    },

    /// Surface margins must be finite and non-negative.
    InvalidMargin {
        /// Which side of the surface (`left`, `right`, `top`, `bottom`).
        side: &'static str,
        /// The margin value provided.
        value: f64,
    },

    /// Bounds padding must be finite and non-negative.
    InvalidPadding(f64),

    /// Pixel or residual thresholds must be positive and finite.
    InvalidThreshold {
        /// Name of the threshold parameter.
        name: &'static str,
        /// The threshold value provided.
        value: f64,
    },

    /// Curve sampling needs at least one segment.
    InvalidSegments(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A data file could not be read or written.
    Io {
        /// Path of the file involved.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RegressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(input) => write!(f, "Invalid input: '{input}' is not a number"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidSurface { width, height } => {
                write!(
                    f,
                    "Invalid surface: {width}x{height} (both sides must be > 0 and finite)"
                )
            }
            Self::InvalidMargin { side, value } => {
                write!(f, "Invalid {side} margin: {value} (must be >= 0 and finite)")
            }
            Self::InvalidPadding(pad) => {
                write!(f, "Invalid padding: {pad} (must be >= 0 and finite)")
            }
            Self::InvalidThreshold { name, value } => {
                write!(f, "Invalid {name}: {value} (must be > 0 and finite)")
            }
            Self::InvalidSegments(n) => {
                write!(f, "Invalid curve segments: {n} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Io { path, message } => write!(f, "I/O error on '{path}': {message}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RegressionError {}
