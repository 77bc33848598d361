//! # dualnum_core: Forward-Mode Automatic Differentiation on Dual Numbers
//!
//! ## Layer 1 (Foundation) Role
//!
//! dualnum_core is the library layer of the workspace, providing:
//! - The dual number type `Dual<T>` and its algebra (`types::dual`)
//! - Conversion from foreign two-component types (`types::adapter`)
//! - Elementary functions with exact first derivatives (`math::elementary`)
//! - Cylinder Bessel functions of a dual argument (`math::bessel`)
//! - Checked evaluation reporting domain errors (`math::strict`)
//! - Newton root finding driven by dual numbers (`math::solvers`)
//! - Error types: `SolverError`, `DomainError`, `ConfigError` (`types::error`)
//!
//! A dual number `a + bε` with `ε² = 0` carries a value `a` and a derivative
//! `b`. Seeding the input as `(x, 1)` makes every result carry `d/dx` of the
//! computation exactly, without symbolic manipulation or finite differences.
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Traits for generic numerical computation
//! - num-complex: Complex values of the Hankel functions
//! - complex-bessel: Scalar J, Y, I and K values (Amos Algorithm 644)
//! - thiserror: Error types
//! - tracing: Solver diagnostics (no subscriber is installed here)
//! - num-dual: Conversion from and cross-checking against num-dual (optional)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use dualnum_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//! use dualnum_core::types::Dual;
//!
//! // d/dx (4x³ + 3x² + 2x + 1) at x = 1
//! let x = Dual::variable(1.0_f64);
//! let y = 4.0 * x * x * x + 3.0 * x * x + 2.0 * x + 1.0;
//! assert_eq!(y, Dual::new(10.0, 20.0));
//!
//! // Elementary functions carry the chain rule
//! let z = (x * 2.0).sin();
//! assert_eq!(z.derivative(), 2.0 * 2.0_f64.cos());
//!
//! // Newton's method with the derivative supplied by the dual number
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = solver.find_root_ad(|x: Dual<f64>| x * x - 10.0, 10.0).unwrap();
//! assert!((root - 10.0_f64.sqrt()).abs() < 1e-14);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): `DualComponents` for `num_dual::Dual64`/`Dual32`
//! - `serde`: Serialisation for `Dual`, `SolverConfig` and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
