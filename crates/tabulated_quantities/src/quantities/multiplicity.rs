//! Energy-dependent multiplicities.

use super::macros::{non_negative_values, tabulated_quantity};

tabulated_quantity! {
    /// Average number of secondary particles produced per reaction, as a
    /// function of incident energy.
    ///
    /// A multiplicity is never negative. Construction, conversion and every
    /// arithmetic result are checked, so `try_sub` and `negate` fail when
    /// they would produce a negative value.
    Multiplicity {
        x: energies,
        y: values,
        check: non_negative_values,
    }
}
