//! Error types for structured error handling.
//!
//! The dual-number algebra itself never fails: domain violations surface as
//! IEEE-754 NaN/infinity. Errors exist only at the opt-in edges:
//! - `SolverError`: Errors from the Newton root finder
//! - `DomainError`: Errors from strict-mode evaluation (`math::strict`)
//! - `ConfigError`: Invalid solver configuration

use thiserror::Error;

/// Root-finding solver errors.
///
/// Provides structured error handling for root-finding solver operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `DerivativeNearZero`: Derivative too small for a Newton step
/// - `NumericalInstability`: Iterate became NaN or infinite
///
/// # Examples
/// ```
/// use dualnum_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Strict-mode domain errors.
///
/// Raised only by the checked functions in `math::strict`; the default
/// functions propagate NaN/infinity instead.
///
/// # Examples
/// ```
/// use dualnum_core::types::DomainError;
///
/// let err = DomainError::OutOfDomain { function: "sqrt".to_string(), value: -1.0 };
/// assert_eq!(format!("{}", err), "sqrt is not defined at -1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// Division by, or inversion of, a dual number with zero value component.
    #[error("Division by a dual number with zero value component")]
    ZeroDivisor,

    /// A finite argument produced a non-finite result.
    #[error("{function} is not defined at {value}")]
    OutOfDomain {
        /// Name of the function that was evaluated
        function: String,
        /// Value component of the offending argument
        value: f64,
    },

    /// A component is already NaN or infinite.
    #[error("Non-finite dual number: {value} + {derivative}e")]
    NonFinite {
        /// Value component
        value: f64,
        /// Derivative component
        derivative: f64,
    },
}

/// Solver configuration errors.
///
/// # Examples
/// ```
/// use dualnum_core::types::ConfigError;
///
/// let err = ConfigError::InvalidTolerance(-1.0);
/// assert!(format!("{}", err).contains("positive"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Tolerance is not a positive finite number.
    #[error("Invalid tolerance {0}: must be positive and finite")]
    InvalidTolerance(f64),

    /// Iteration cap of zero.
    #[error("Invalid max_iterations: must be > 0")]
    ZeroIterations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 7 };
        assert_eq!(err.to_string(), "Failed to converge after 7 iterations");

        let err = SolverError::DerivativeNearZero { x: 0.5 };
        assert_eq!(err.to_string(), "Derivative near zero at x = 0.5");

        let err = SolverError::NumericalInstability("overflow".to_string());
        assert_eq!(err.to_string(), "Numerical instability: overflow");
    }

    #[test]
    fn test_domain_error_display() {
        assert!(DomainError::ZeroDivisor.to_string().contains("zero value"));

        let err = DomainError::NonFinite {
            value: f64::NAN,
            derivative: 1.0,
        };
        assert_eq!(err.to_string(), "Non-finite dual number: NaN + 1e");
    }

    #[test]
    fn test_config_error_display() {
        assert!(ConfigError::ZeroIterations.to_string().contains("> 0"));
        assert!(ConfigError::InvalidTolerance(0.0)
            .to_string()
            .contains("Invalid tolerance 0"));
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<SolverError>();
        assert_error::<DomainError>();
        assert_error::<ConfigError>();
    }
}
