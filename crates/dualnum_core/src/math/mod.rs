//! Functions of dual numbers and their consumers.
//!
//! - `elementary`: trigonometric, hyperbolic, exponential, logarithmic,
//!   power and root functions
//! - `bessel`: cylinder Bessel, Neumann, Hankel and modified Bessel functions
//! - `strict`: checked variants that return `DomainError` instead of NaN
//! - `solvers`: Newton root finder with explicit or AD derivatives

pub mod bessel;
pub mod elementary;
pub mod solvers;
pub mod strict;
