//! Error types for physical quantities.
//!
//! This module provides:
//! - `QuantityError`: Engine errors plus domain invariants of the quantities

use tabulated_core::types::TableError;
use thiserror::Error;

/// Physical quantity errors.
///
/// # Variants
/// - `Table`: Wrapped table construction or operation error
/// - `NegativeValue`: A non-negative quantity received a negative value
///
/// # Examples
/// ```
/// use tabulated_quantities::QuantityError;
///
/// let err = QuantityError::NegativeValue { index: 3, value: -0.5 };
/// assert!(format!("{}", err).contains("index 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// Table error.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Negative value in a quantity that cannot be negative.
    #[error("Negative value {value} at index {index}")]
    NegativeValue {
        /// Index of the first negative value
        index: usize,
        /// The negative value
        value: f64,
    },
}
