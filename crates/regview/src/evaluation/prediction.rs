//! User-entered X values and model predictions.
//!
//! ## Purpose
//!
//! The shell collects keystrokes into an X-input field and, on submit, shows
//! the model's prediction or an "invalid X" state. This module owns the edit
//! buffer, the fallible parse, and the resulting display state.
//!
//! ## Design notes
//!
//! * **Filtered input**: Only digits, `.` and `-` enter the buffer.
//! * **Whole-string parse**: A buffer such as `1.5-` or `--2` is invalid
//!   rather than silently truncated to its numeric prefix.
//! * **No panics**: Parse failure is a [`RegressionError::InvalidInput`]
//!   value mapped to [`Prediction::Invalid`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::Curve;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Parsing
// ============================================================================

/// Parse a user-supplied X value.
///
/// Leading and trailing whitespace is ignored; anything else that is not a
/// complete finite number is rejected.
pub fn parse_x<T: Float>(input: &str) -> core::result::Result<T, RegressionError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .and_then(|v| T::from(v))
        .filter(|v| v.is_finite())
        .ok_or_else(|| RegressionError::InvalidInput(trimmed.to_string()))
}

// ============================================================================
// Prediction State
// ============================================================================

/// What the prediction line of the shell shows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Prediction<T> {
    /// Nothing submitted yet.
    #[default]
    Pending,

    /// Model output for a valid X.
    Value {
        /// Submitted X.
        x: T,
        /// Predicted Y.
        y: T,
    },

    /// The submitted text was not a number.
    Invalid,
}

impl<T: Float> Prediction<T> {
    /// Predict `y` at the parsed value of `input`.
    pub fn from_input<C: Curve<T>>(input: &str, curve: &C) -> Self {
        match parse_x::<T>(input) {
            Ok(x) => Self::Value {
                x,
                y: curve.evaluate(x),
            },
            Err(_) => Self::Invalid,
        }
    }

    /// Predicted value, if any.
    pub fn value(&self) -> Option<T> {
        match self {
            Self::Value { y, .. } => Some(*y),
            _ => None,
        }
    }
}

impl<T: Float + Display> Display for Prediction<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Pending => write!(f, "Prediction: Y = ?"),
            Self::Value { y, .. } => write!(f, "Prediction: Y = {y:.6}"),
            Self::Invalid => write!(f, "Prediction: invalid X"),
        }
    }
}

// ============================================================================
// Input Buffer
// ============================================================================

/// Edit buffer behind the X-input field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XInput {
    buffer: String,
}

impl XInput {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters the field accepts.
    #[inline]
    pub fn accepts(ch: char) -> bool {
        ch.is_ascii_digit() || ch == '.' || ch == '-'
    }

    /// Append `ch` if it is accepted; returns whether it was.
    pub fn push(&mut self, ch: char) -> bool {
        if Self::accepts(ch) {
            self.buffer.push(ch);
            true
        } else {
            false
        }
    }

    /// Delete the last character.
    pub fn backspace(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// The buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Parse the buffer and evaluate `curve` at it.
    pub fn submit<T: Float, C: Curve<T>>(&self, curve: &C) -> Prediction<T> {
        Prediction::from_input(&self.buffer, curve)
    }
}
