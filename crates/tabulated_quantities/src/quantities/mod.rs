//! Typed physical quantities over interpolation tables.
//!
//! Quantities of the same type combine with `try_add` and `try_sub`, which
//! follow the zero-padding rules of
//! [`InterpolationTable::add_table`](tabulated_core::table::InterpolationTable::add_table).
//! Quantities that cannot be negative re-check their values after every
//! operation.

mod macros;

mod average_energy;
mod cross_section;
mod form_factor;
mod multiplicity;
mod scattering_function;

pub use average_energy::AverageEnergy;
pub use cross_section::CrossSection;
pub use form_factor::FormFactor;
pub use multiplicity::Multiplicity;
pub use scattering_function::ScatteringFunction;
