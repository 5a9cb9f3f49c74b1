//! # regview: Interactive Regression Core for Rust
//!
//! The computational core of an interactive regression visualizer: an
//! editable 2-D point set, closed-form least-squares fits (a line or a
//! second-degree polynomial) and the mapping between data space and pixel
//! space on a rendering surface.
//!
//! ## What does it do?
//!
//! A user places points on a surface, removes them by clicking near them,
//! loads and saves them as text files and switches between a linear and a
//! quadratic model. After every change the model is refitted, the visible
//! data window is recomputed from the points, and the coordinate mapping is
//! updated so the next frame can be drawn. Rendering itself is left to the
//! caller, which draws from a [`Scene`](prelude::Scene).
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use regview::prelude::*;
//!
//! let mut session = RegressionView::new()
//!     .points([(1.0, 1.0), (2.0, 2.0), (3.0, 1.3), (4.0, 3.0), (5.0, 4.5)])
//!     .build()?;
//!
//! // The least-squares line is y = 0.8x - 0.04
//! let y = session.evaluate(6.0);
//! assert!(y > 4.5);
//!
//! // Switch to a parabola and ask for a prediction
//! session.dispatch(Action::SetKind(Quadratic))?;
//! println!("{}", session.predict("2.5"));
//!
//! println!("{}", session.summary());
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Editing
//!
//! Every mutation goes through [`dispatch`](prelude::RegressionSession::dispatch),
//! which refits the model and refreshes the bounds and the mapping before
//! returning:
//!
//! ```rust
//! use regview::prelude::*;
//!
//! let mut session = RegressionView::<f64>::new()
//!     .surface(800.0, 600.0)
//!     .removal_threshold(10.0)
//!     .build()?;
//!
//! // Click at a pixel position
//! session.dispatch(Action::AddAtScreen { sx: 400.0, sy: 300.0 })?;
//! assert_eq!(session.points().len(), 1);
//!
//! // The bounds followed the new point, so find where it is drawn now
//! let p = session.points()[0];
//! let (sx, sy) = session.to_screen(p.x, p.y);
//!
//! // Click right next to it to remove it again
//! let outcome = session.dispatch(Action::RemoveNearest { sx: sx + 3.0, sy })?;
//! assert!(matches!(outcome, Outcome::Removed { index: 0, .. }));
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Degenerate Fits
//!
//! Too few points, identical x-values or a singular normal matrix never
//! produce an error or NaN. The fit falls back to a zero model and says so:
//!
//! ```rust
//! use regview::prelude::*;
//!
//! let fit = QuadraticSolver::fit(&[Point::new(1.0, 2.0), Point::new(2.0, 3.0)]);
//! assert!(fit.is_degenerate());
//! assert_eq!(fit.model(), QuadraticModel::zero());
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The numeric core builds without the standard library. Disable default
//! features to drop the file adapter and the command-line shell:
//!
//! ```toml
//! [dependencies]
//! regview = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade. Loading and saving are
//! reported at `info`, unreadable files and skipped records at `warn`, and
//! refits at `debug`. Install any logger (the `regview` binary uses
//! `env_logger`) to see them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - points, storage and errors.
mod primitives;

// Layer 2: Math - linear algebra, bounds and coordinate mapping.
mod math;

// Layer 3: Algorithms - closed-form solvers.
mod algorithms;

// Layer 4: Evaluation - residuals, diagnostics and prediction.
mod evaluation;

// Layer 5: Engine - model state and the session.
mod engine;

// Layer 6: Adapters - point files.
#[cfg(feature = "std")]
mod adapters;

// High-level fluent API.
mod api;

// Standard regview prelude.
pub mod prelude {
    pub use crate::algorithms::fit::{Curve, Degeneracy, Fit};
    pub use crate::algorithms::linear::{LinearModel, LinearSolver};
    pub use crate::algorithms::quadratic::{QuadraticModel, QuadraticSolver};
    pub use crate::api::{
        Action, FitSummary, Margins, Outcome, RegressionError,
        RegressionKind::{self, Linear, Quadratic},
        RegressionSession, RegressionViewBuilder as RegressionView, Scene, ScenePoint,
        SessionConfig,
    };
    pub use crate::engine::state::{ActiveModel, ModelState};
    pub use crate::evaluation::diagnostics::Diagnostics;
    pub use crate::evaluation::prediction::{parse_x, Prediction, XInput};
    pub use crate::math::bounds::Bounds;
    pub use crate::math::mapping::{Axes, CoordinateMapper};
    pub use crate::primitives::point::Point;
    pub use crate::primitives::store::{PointStore, ScreenProjection};
}

// Internal modules for testing.
//
// This module re-exports the internal layers so the integration tests can
// reach every component directly.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    #[cfg(feature = "std")]
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
