//! Core value and error types.
//!
//! This module provides:
//! - `error`: Structured error types for table construction and table operations
//!
//! # Re-exports
//!
//! - [`TableError`] from `error`

pub mod error;

pub use error::TableError;
