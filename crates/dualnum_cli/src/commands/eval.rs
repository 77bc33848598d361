//! Eval command implementation
//!
//! Evaluates a named elementary function at `x` seeded as `(x, 1)`, printing
//! the value and the derivative.

use dualnum_core::math::{elementary, strict};
use dualnum_core::types::{DomainError, Dual};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::{CliError, Result};

type Unary = fn(Dual<f64>) -> Dual<f64>;
type Checked = fn(Dual<f64>) -> std::result::Result<Dual<f64>, DomainError>;

/// Supported functions: name, propagating form, checked form.
const FUNCTIONS: &[(&str, Unary, Checked)] = &[
    ("sqrt", elementary::sqrt, strict::sqrt),
    ("cbrt", elementary::cbrt, strict::cbrt),
    ("sin", elementary::sin, strict::sin),
    ("cos", elementary::cos, strict::cos),
    ("tan", elementary::tan, strict::tan),
    ("asin", elementary::asin, strict::asin),
    ("acos", elementary::acos, strict::acos),
    ("atan", elementary::atan, strict::atan),
    ("sinh", elementary::sinh, strict::sinh),
    ("cosh", elementary::cosh, strict::cosh),
    ("tanh", elementary::tanh, strict::tanh),
    ("asinh", elementary::asinh, strict::asinh),
    ("acosh", elementary::acosh, strict::acosh),
    ("atanh", elementary::atanh, strict::atanh),
    ("exp", elementary::exp, strict::exp),
    ("exp2", elementary::exp2, strict::exp2),
    ("expm1", elementary::expm1, strict::expm1),
    ("log", elementary::log, strict::log),
    ("log1p", elementary::log1p, strict::log1p),
    ("log10", elementary::log10, strict::log10),
    ("log2", elementary::log2, strict::log2),
];

/// Names accepted by [`evaluate`].
pub fn function_names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.iter().map(|(name, _, _)| *name)
}

/// Evaluate `function` at `x` with derivative seed 1.
///
/// With `strict`, domain violations are reported as errors instead of
/// yielding NaN or infinity.
pub fn evaluate(function: &str, x: f64, strict: bool) -> Result<Dual<f64>> {
    let name = function.to_lowercase();
    let (_, propagating, checked) = FUNCTIONS
        .iter()
        .find(|(candidate, _, _)| *candidate == name)
        .ok_or_else(|| CliError::UnknownFunction(function.to_string()))?;

    let seed = Dual::variable(x);
    debug!(function = %name, x, strict, "Evaluating");
    if strict {
        Ok(checked(seed)?)
    } else {
        Ok(propagating(seed))
    }
}

/// Render a result with the configured precision.
pub fn render(function: &str, x: f64, result: Dual<f64>, precision: usize) -> String {
    format!("{}({}) = {:.*}", function, x, precision, result)
}

/// Run the eval command
pub fn run(function: Option<&str>, x: Option<f64>, list: bool, strict: bool, config: &AppConfig) -> Result<()> {
    if list {
        for name in function_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let (function, x) = match (function, x) {
        (Some(function), Some(x)) => (function, x),
        _ => {
            return Err(CliError::InvalidArgument(
                "eval needs a FUNCTION and an X (or --list)".to_string(),
            ))
        }
    };

    info!(function, x, strict, "Starting evaluation...");
    let result = evaluate(function, x, strict)?;
    println!("{}", render(function, x, result, config.output.precision));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_every_listed_function_evaluates() {
        for name in function_names() {
            // acosh is only defined for x >= 1
            let x = if name == "acosh" { 1.5 } else { 0.5 };
            let result = evaluate(name, x, true).unwrap();
            assert!(result.is_finite(), "{} at {} should be finite", name, x);
        }
        assert_eq!(function_names().count(), 21);
    }

    #[test]
    fn test_acosh_below_one_is_nan() {
        assert!(evaluate("acosh", 0.5, false).unwrap().is_nan());
        assert!(evaluate("acosh", 0.5, true).is_err());
    }

    #[test]
    fn test_sin_value_and_derivative() {
        let result = evaluate("sin", 0.5, false).unwrap();
        assert_eq!(result.value(), 0.5_f64.sin());
        assert_eq!(result.derivative(), 0.5_f64.cos());
    }

    #[test]
    fn test_case_insensitive_names() {
        assert_eq!(evaluate("LOG", 2.0, false).unwrap(), Dual::new(2.0_f64.ln(), 0.5));
    }

    #[test]
    fn test_unknown_function() {
        assert!(matches!(
            evaluate("sec", 1.0, false),
            Err(CliError::UnknownFunction(name)) if name == "sec"
        ));
    }

    #[test]
    fn test_strict_reports_domain_error() {
        let lenient = evaluate("sqrt", -1.0, false).unwrap();
        assert!(lenient.is_nan());

        assert!(matches!(
            evaluate("sqrt", -1.0, true),
            Err(CliError::Domain(DomainError::OutOfDomain { .. }))
        ));
    }

    #[test]
    fn test_strict_accepts_valid_input() {
        let result = evaluate("atanh", 0.5, true).unwrap();
        assert_relative_eq!(result.derivative(), 1.0 / 0.75, epsilon = 1e-15);
    }

    #[test]
    fn test_render() {
        let rendered = render("exp", 0.0, Dual::new(1.0, 1.0), 3);
        assert_eq!(rendered, "exp(0) = 1.000 + 1.000e");
    }

    #[test]
    fn test_run_requires_arguments() {
        let config = AppConfig::default();
        assert!(run(None, None, false, false, &config).is_err());
        assert!(run(None, None, true, false, &config).is_ok());
    }
}
