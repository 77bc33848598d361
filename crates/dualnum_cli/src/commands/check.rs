//! Check command implementation
//!
//! Prints the resolved configuration and runs a quick derivative sanity check.

use dualnum_core::types::Dual;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::{CliError, Result};

/// `d/dx (4x³ + 3x² + 2x + 1)` at `x = 1`, expected to be `(10, 20)`.
pub fn polynomial_check() -> Dual<f64> {
    let x = Dual::variable(1.0);
    4.0 * x * x * x + 3.0 * x * x + 2.0 * x + 1.0
}

/// Describe the resolved configuration, one setting per line.
pub fn describe(config: &AppConfig) -> Vec<String> {
    vec![
        format!("log_level: {}", config.log_level),
        format!("solver.tolerance: {:e}", config.solver.tolerance),
        format!("solver.max_iterations: {}", config.solver.max_iterations),
        format!("output.precision: {}", config.output.precision),
    ]
}

/// Run the check command
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Checking configuration...");
    println!("dualnum v{}", crate::VERSION);
    for line in describe(config) {
        println!("  {}", line);
    }

    let result = polynomial_check();
    if result != Dual::new(10.0, 20.0) {
        warn!(%result, "Derivative sanity check failed");
        return Err(CliError::InvalidArgument(format!(
            "sanity check produced {} instead of 10 + 20e",
            result
        )));
    }
    println!("  sanity: 4x^3 + 3x^2 + 2x + 1 at (1, 1) = {}", result);
    Ok(())
}
