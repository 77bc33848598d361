//! Newton-Raphson root-finding solver.

use num_traits::Float;
use tracing::{debug, warn};

use super::SolverConfig;
use crate::types::{Dual, SolverError};

/// Derivatives smaller than this in magnitude stop the iteration.
const DERIVATIVE_FLOOR: f64 = 1e-30;

/// Outcome of a converged Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonReport<T> {
    /// Final iterate.
    pub root: T,
    /// Number of Newton steps taken (zero when `x0` is an exact root).
    pub iterations: usize,
    /// `f` at the last evaluated iterate.
    pub residual: T,
    /// `f'` at the last evaluated iterate.
    pub derivative: T,
}

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)`. The derivative
/// is either supplied explicitly ([`find_root`](Self::find_root)) or obtained
/// by evaluating `f` on the dual number `(x_n, 1)`
/// ([`find_root_ad`](Self::find_root_ad)).
///
/// # Convergence
///
/// The iteration stops when the step satisfies
/// `|Δx| < tolerance · max(1, |x_{n+1}|)`, or immediately when `f(x_n)` is
/// exactly zero. It fails when:
/// - `|f'(x_n)| < 1e-30`
/// - an iterate, value or derivative becomes NaN or infinite
/// - `max_iterations` steps pass without convergence
///
/// # Example
///
/// ```
/// use dualnum_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
/// use dualnum_core::types::Dual;
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// // Solve x² - 10 = 0; the derivative comes from the dual number.
/// let report = solver.solve_ad(|x: Dual<f64>| x * x - 10.0, 10.0).unwrap();
/// assert!((report.root - 10.0_f64.sqrt()).abs() < 1e-14);
/// assert!(report.iterations < 10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Errors
    ///
    /// * `SolverError::MaxIterationsExceeded` - Failed to converge
    /// * `SolverError::DerivativeNearZero` - Derivative too small
    /// * `SolverError::NumericalInstability` - Non-finite value or iterate
    ///
    /// # Example
    ///
    /// ```
    /// use dualnum_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let root = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!(f(root).abs() < 1e-12);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.iterate(|x| (f(x), f_prime(x)), x0)
            .map(|report| report.root)
    }

    /// Find a root using automatic differentiation.
    ///
    /// `f` is evaluated on `Dual::variable(x_n)`; the value component is
    /// `f(x_n)` and the derivative component is `f'(x_n)`.
    ///
    /// # Errors
    ///
    /// Same as [`find_root`](Self::find_root).
    pub fn find_root_ad<F>(&self, f: F, x0: T) -> Result<T, SolverError>
    where
        F: Fn(Dual<T>) -> Dual<T>,
    {
        self.solve_ad(f, x0).map(|report| report.root)
    }

    /// Like [`find_root_ad`](Self::find_root_ad), returning the iteration
    /// count and the last value/derivative pair alongside the root.
    pub fn solve_ad<F>(&self, f: F, x0: T) -> Result<NewtonReport<T>, SolverError>
    where
        F: Fn(Dual<T>) -> Dual<T>,
    {
        self.iterate(|x| f(Dual::variable(x)).into_parts(), x0)
    }

    fn iterate<E>(&self, eval: E, x0: T) -> Result<NewtonReport<T>, SolverError>
    where
        E: Fn(T) -> (T, T),
    {
        let floor = T::from(DERIVATIVE_FLOOR).unwrap_or_else(T::min_positive_value);
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let (value, slope) = eval(x);

            if value == T::zero() {
                debug!(iteration, x = to_f64(x), "exact root");
                return Ok(NewtonReport {
                    root: x,
                    iterations: iteration,
                    residual: value,
                    derivative: slope,
                });
            }

            if !value.is_finite() || !slope.is_finite() {
                warn!(iteration, x = to_f64(x), "non-finite function value or derivative");
                return Err(SolverError::NumericalInstability(format!(
                    "f or f' is not finite at x = {}",
                    to_f64(x)
                )));
            }

            if slope.abs() < floor {
                warn!(iteration, x = to_f64(x), "derivative near zero");
                return Err(SolverError::DerivativeNearZero { x: to_f64(x) });
            }

            let step = value / slope;
            let next = x - step;
            debug!(iteration, x = to_f64(x), step = to_f64(step), "newton step");

            if !next.is_finite() {
                warn!(iteration, x = to_f64(x), "iterate became non-finite");
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }

            x = next;
            if step.abs() < self.config.tolerance * x.abs().max(T::one()) {
                return Ok(NewtonReport {
                    root: x,
                    iterations: iteration + 1,
                    residual: value,
                    derivative: slope,
                });
            }
        }

        warn!(
            iterations = self.config.max_iterations,
            x = to_f64(x),
            "Newton iteration did not converge"
        );
        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
