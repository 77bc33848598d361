//! Square root command implementation
//!
//! Solves `x² − N = 0` with the Newton solver, taking the derivative from
//! the dual number rather than from a hand-written `f'`.

use dualnum_core::math::solvers::{NewtonRaphsonSolver, NewtonReport};
use dualnum_core::types::Dual;
use tracing::info;

use crate::config::AppConfig;
use crate::{CliError, Result};

/// Compute `√n` from the starting point `x0` (default `n`).
pub fn solve(n: f64, x0: Option<f64>, config: &AppConfig) -> Result<NewtonReport<f64>> {
    if !n.is_finite() || n < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "square root needs a finite, non-negative number, got {}",
            n
        )));
    }

    let solver = NewtonRaphsonSolver::new(config.solver);
    let target = Dual::constant(n);
    let report = solver.solve_ad(|x: Dual<f64>| x * x - target, x0.unwrap_or(n))?;
    Ok(report)
}

/// Render a solver report with the configured precision.
pub fn render(n: f64, report: &NewtonReport<f64>, precision: usize) -> String {
    format!(
        "sqrt({}) = {:.*} ({} iterations)",
        n, precision, report.root, report.iterations
    )
}

/// Run the sqrt command
pub fn run(n: f64, x0: Option<f64>, config: &AppConfig) -> Result<()> {
    info!(n, x0 = x0.unwrap_or(n), "Solving x^2 - N = 0");

    let report = solve(n, x0, config)?;
    info!(
        iterations = report.iterations,
        residual = report.residual,
        "Newton iteration converged"
    );

    println!("{}", render(n, &report, config.output.precision));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_of_ten() {
        let report = solve(10.0, None, &AppConfig::default()).unwrap();
        assert_relative_eq!(report.root, 3.16227766016838, epsilon = 1e-14);
        assert!(report.iterations < 10);
    }

    #[test]
    fn test_custom_start() {
        let report = solve(2.0, Some(1.0), &AppConfig::default()).unwrap();
        assert_relative_eq!(report.root, std::f64::consts::SQRT_2, epsilon = 1e-15);
    }

    #[test]
    fn test_zero() {
        let report = solve(0.0, None, &AppConfig::default()).unwrap();
        assert_eq!(report.root, 0.0);
        assert_eq!(report.iterations, 0);
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            solve(-4.0, None, &AppConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(solve(f64::NAN, None, &AppConfig::default()).is_err());
    }

    #[test]
    fn test_iteration_cap_from_config() {
        let mut config = AppConfig::default();
        config.solver.max_iterations = 2;
        assert!(matches!(
            solve(1e6, None, &config),
            Err(CliError::Solver(_))
        ));
    }

    #[test]
    fn test_render() {
        let report = NewtonReport {
            root: 3.16227766016838,
            iterations: 7,
            residual: 0.0,
            derivative: 6.3,
        };
        assert_eq!(render(10.0, &report, 4), "sqrt(10) = 3.1623 (7 iterations)");
    }
}
