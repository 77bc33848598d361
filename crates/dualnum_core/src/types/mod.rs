//! Core dual-number type, conversion adapter and error types.
//!
//! This module provides:
//! - `dual`: The [`Dual`] type and its algebra (arithmetic, inverse, conjugate, ordering)
//! - `adapter`: The [`DualComponents`] conversion seam for foreign two-component types
//! - `error`: Structured error types for the solver, strict mode and configuration
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Dual`], [`DualF32`], [`DualF64`] from `dual`
//! - [`DualComponents`] from `adapter`
//! - [`SolverError`], [`DomainError`], [`ConfigError`] from `error`

pub mod adapter;
pub mod dual;
pub mod error;

// Re-export commonly used types at module level
pub use adapter::DualComponents;
pub use dual::{Dual, DualF32, DualF64};
pub use error::{ConfigError, DomainError, SolverError};
