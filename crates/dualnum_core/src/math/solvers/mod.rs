//! Root-finding on top of the dual-number type.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: quadratic convergence using derivatives, either
//!   supplied explicitly or computed by forward-mode AD
//!
//! ## Configuration
//!
//! [`SolverConfig`] controls:
//! - `tolerance`: step tolerance (default: 1e-15)
//! - `max_iterations`: maximum iteration count (default: 100)
//!
//! ## AD Compatibility
//!
//! `find_root_ad` and `solve_ad` seed the iterate as `Dual::variable(x)` and
//! read `f(x)` and `f'(x)` off the result, so only `f` has to be written.
//!
//! ## Examples
//!
//! ```
//! use dualnum_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//! use dualnum_core::types::Dual;
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//!
//! let root = solver.find_root_ad(|x: Dual<f64>| x * x - 2.0, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-15);
//!
//! let root = solver.find_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-15);
//! ```

mod config;
mod newton_raphson;

// Re-export public types at module level
pub use config::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use newton_raphson::{NewtonRaphsonSolver, NewtonReport};
