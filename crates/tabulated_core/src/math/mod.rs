//! Numerical building blocks for tabulated functions.
//!
//! - `interpolators`: Per-segment interpolation laws
//! - `linearisation`: Convergence predicate and refinement configuration

pub mod interpolators;
pub mod linearisation;
