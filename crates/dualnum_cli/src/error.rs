//! CLI error types

use dualnum_core::types::{DomainError, SolverError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors reported by the `dualnum` commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be assembled
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Newton iteration failed
    #[error("Solver failed: {0}")]
    Solver(#[from] SolverError),

    /// Strict evaluation hit a domain violation
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Function name not known to `eval`
    #[error("Unknown function: {0}. Run `dualnum eval --list` for the supported names")]
    UnknownFunction(String),

    /// Bessel kind not known to `bessel`
    #[error("Unknown Bessel kind: {0}. Supported: j, y, i, k, h1, h2")]
    UnknownKind(String),

    /// Argument outside the accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::UnknownFunction("sec".to_string());
        assert!(err.to_string().starts_with("Unknown function: sec"));

        let err = CliError::UnknownKind("z".to_string());
        assert!(err.to_string().contains("h1, h2"));

        let err: CliError = SolverError::MaxIterationsExceeded { iterations: 4 }.into();
        assert_eq!(err.to_string(), "Solver failed: Failed to converge after 4 iterations");

        let err: CliError = DomainError::ZeroDivisor.into();
        assert!(err.to_string().starts_with("Domain error"));

        let err: CliError = ConfigError::InvalidPrecision(99).into();
        assert!(err.to_string().starts_with("Invalid precision: 99"));
    }
}
