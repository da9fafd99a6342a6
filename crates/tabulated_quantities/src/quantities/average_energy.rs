//! Average secondary energies.

use super::macros::{any_values, tabulated_quantity};

tabulated_quantity! {
    /// Average energy carried away by a reaction product, as a function of
    /// incident energy.
    AverageEnergy {
        x: energies,
        y: values,
        check: any_values,
    }
}
