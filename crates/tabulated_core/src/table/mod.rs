//! Piecewise-interpolated tables.
//!
//! [`InterpolationTable`] is the value type at the centre of the crate:
//!
//! - Construction and read accessors (`interpolation_table`)
//! - Pointwise evaluation with zero outside the domain (`evaluate`)
//! - Scalar and table arithmetic (`arithmetic`)
//! - Adaptive linearisation (`linearise`)
//!
//! All operations are pure: they borrow their operands and return new
//! tables, so independent tables can be shared freely across threads.

mod arithmetic;
mod evaluate;
mod interpolation_table;
mod linearise;

pub use interpolation_table::InterpolationTable;
