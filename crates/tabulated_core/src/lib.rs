//! # tabulated_core: Tabulated-Function Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! tabulated_core is the bottom layer of the workspace, providing:
//! - Interpolation laws between tabulated points (`math::interpolators`)
//! - Convergence predicate and linearisation settings (`math::linearisation`)
//! - The piecewise-interpolated table value type (`table`)
//! - Error types: `TableError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! - thiserror: Error derivation
//! - tracing: Structured diagnostics (no subscriber is installed)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use tabulated_core::math::interpolators::InterpolationLaw;
//! use tabulated_core::table::InterpolationTable;
//!
//! let a = InterpolationTable::with_law(
//!     vec![1.0, 2.0, 3.0, 4.0],
//!     vec![4.0, 3.0, 2.0, 1.0],
//!     InterpolationLaw::LinearLinear,
//! )
//! .unwrap();
//! let b = InterpolationTable::with_law(
//!     vec![2.0, 4.0],
//!     vec![1.0, 3.0],
//!     InterpolationLaw::LinearLinear,
//! )
//! .unwrap();
//!
//! // b is zero below x = 2, so the sum steps up there
//! let sum = a.add_table(&b).unwrap();
//! assert_eq!(sum.x(), &[1.0, 2.0, 2.0, 3.0, 4.0]);
//! assert_eq!(sum.evaluate(1.5), 3.5);
//! assert_eq!(sum.evaluate(2.0), 4.0);
//!
//! // Non-linear laws must be linearised before table arithmetic
//! let power = InterpolationTable::with_law(
//!     vec![1.0, 4.0],
//!     vec![1.0, 16.0],
//!     InterpolationLaw::LogLog,
//! )
//! .unwrap();
//! assert!(sum.add_table(&power).is_err());
//! assert!(sum.add_table(&power.linearise().unwrap()).is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for laws, settings and tables

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod table;
pub mod types;
