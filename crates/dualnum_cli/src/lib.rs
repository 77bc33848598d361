//! Command line front end for the dualnum automatic differentiation library
//!
//! The `dualnum` binary exposes Newton square roots, elementary function
//! derivatives and Bessel function derivatives, all computed with
//! [`dualnum_core::types::Dual`].

pub mod commands;
pub mod config;
pub mod error;

pub use dualnum_core;
pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
