//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod bessel;
pub mod check;
pub mod eval;
pub mod sqrt;
