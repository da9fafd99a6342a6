//! # tabulated_quantities: Physical Quantities (L2)
//!
//! Typed quantities built on `tabulated_core` tables.
//!
//! This crate provides:
//! - Energy-dependent quantities: cross sections, multiplicities, average energies
//! - Momentum-transfer quantities: form factors, scattering functions
//! - Error types: `QuantityError`
//!
//! Each quantity owns an `InterpolationTable`, renames its grids after what
//! they physically hold, and keeps the table arithmetic of the core crate.
//!
//! ## Usage Examples
//!
//! ```rust
//! use tabulated_core::math::interpolators::InterpolationLaw;
//! use tabulated_quantities::quantities::CrossSection;
//!
//! let elastic = CrossSection::with_law(
//!     vec![1e-5, 1.0, 2e7],
//!     vec![20.0, 20.0, 1.0],
//!     InterpolationLaw::LinearLinear,
//! )
//! .unwrap();
//! let capture = CrossSection::with_law(
//!     vec![1e-5, 2e7],
//!     vec![5.0, 5.0],
//!     InterpolationLaw::LinearLinear,
//! )
//! .unwrap();
//!
//! let total = elastic.try_add(&capture).unwrap();
//! assert_eq!(total.evaluate(1.0), 25.0);
//! assert_eq!(total.energies(), &[1e-5, 1.0, 2e7]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialise quantities as their underlying table

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod quantities;

pub use error::QuantityError;
