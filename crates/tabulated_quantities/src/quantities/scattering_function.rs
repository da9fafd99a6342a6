//! Incoherent scattering functions.

use super::macros::{non_negative_values, tabulated_quantity};

tabulated_quantity! {
    /// Incoherent scattering function as a function of inverse length.
    ///
    /// Values are non-negative.
    ScatteringFunction {
        x: inverse_lengths,
        y: values,
        check: non_negative_values,
    }
}
