//! Adaptive linearisation settings.
//!
//! - [`ToleranceConvergence`]: Stopping predicate for midpoint bisection
//! - [`LinearisationConfig`]: Convergence predicate plus depth and size bounds
//!
//! The refinement itself lives on
//! [`InterpolationTable::linearise`](crate::table::InterpolationTable::linearise).

mod config;
mod convergence;

pub use config::{LinearisationConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_POINTS};
pub use convergence::{ToleranceConvergence, DEFAULT_THRESHOLD, DEFAULT_TOLERANCE};
