//! Error types for structured error handling.
//!
//! This module provides:
//! - `TableError`: Errors from table construction and table operations

use crate::math::interpolators::InterpolationLaw;
use thiserror::Error;

/// Table construction and operation errors.
///
/// Every invariant violation is reported when the table is built or at the
/// start of an operation, before any result is produced.
///
/// # Variants
/// - `InsufficientData`: Fewer than two points
/// - `LengthMismatch`: Independent and dependent grids differ in length
/// - `RegionMismatch`: Boundary and law lists differ in length, or are empty
/// - `InvalidBoundaries`: Boundaries do not partition the grid
/// - `UnsortedGrid`: Independent grid is not non-decreasing
/// - `MisplacedJump`: Duplicate abscissa away from a region boundary
/// - `LogarithmicDomain`: Logarithmic law applied to invalid values
/// - `UnsupportedOperation`: Arithmetic outside the defined operation set
/// - `NonFiniteValue`: An operation produced an infinite or NaN value
///
/// # Examples
/// ```
/// use tabulated_core::types::TableError;
///
/// let err = TableError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("got 1"));
/// assert!(err.is_construction_error());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableError {
    /// Not enough points to define a table.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// The x and y grids have different lengths.
    #[error("x and y must have same length: got {x} and {y}")]
    LengthMismatch {
        /// Length of the independent grid
        x: usize,
        /// Length of the dependent grid
        y: usize,
    },

    /// Boundary and law counts differ, or no region was given.
    #[error("Region mismatch: got {boundaries} boundaries and {laws} interpolation laws")]
    RegionMismatch {
        /// Number of boundary indices
        boundaries: usize,
        /// Number of interpolation laws
        laws: usize,
    },

    /// Boundaries do not partition the grid into non-empty regions.
    #[error("Invalid region boundaries: {0}")]
    InvalidBoundaries(String),

    /// The independent grid decreases (or holds NaN) at `index`.
    #[error("x values are not sorted at index {index}")]
    UnsortedGrid {
        /// Index of the first offending value
        index: usize,
    },

    /// Duplicate x values away from a region boundary.
    #[error("Discontinuity at index {index} is not located at a region boundary")]
    MisplacedJump {
        /// Index of the first point of the duplicate pair
        index: usize,
    },

    /// A logarithmic axis received values it cannot take the logarithm of.
    #[error("Interpolation law {law} cannot be applied at index {index}")]
    LogarithmicDomain {
        /// Index of the first offending point
        index: usize,
        /// Law of the region containing that point
        law: InterpolationLaw,
    },

    /// Arithmetic that the engine does not define.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// An operation on a valid table evaluated to an infinite or NaN value.
    #[error("Non-finite value at x = {x}")]
    NonFiniteValue {
        /// Abscissa of the offending value
        x: f64,
    },
}

impl TableError {
    /// Returns true for errors raised while validating table construction
    /// arguments, as opposed to errors raised by operations on valid tables.
    pub fn is_construction_error(&self) -> bool {
        !matches!(
            self,
            TableError::UnsupportedOperation(_) | TableError::NonFiniteValue { .. }
        )
    }
}
