//! Interpolation laws for tabulated data.
//!
//! ## Available Laws
//!
//! - [`InterpolationLaw::Histogram`]: Step function holding the left value
//! - [`InterpolationLaw::LinearLinear`]: Piecewise linear in `(x, y)`
//! - [`InterpolationLaw::LinearLog`]: Piecewise linear in `(x, ln y)`
//! - [`InterpolationLaw::LogLinear`]: Piecewise linear in `(ln x, y)`
//! - [`InterpolationLaw::LogLog`]: Piecewise linear in `(ln x, ln y)`
//!
//! ## Example
//!
//! ```
//! use tabulated_core::math::interpolators::InterpolationLaw;
//!
//! // y = x^2 sampled at 1 and 4 is recovered exactly under log-log
//! let y = InterpolationLaw::LogLog.interpolate(2.0, 1.0, 4.0, 1.0, 16.0);
//! assert!((y - 4.0).abs() < 1e-12);
//! ```

mod law;

pub use law::InterpolationLaw;
