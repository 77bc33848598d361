//! Bessel command implementation

use std::fmt;
use std::str::FromStr;

use dualnum_core::math::bessel::{
    cyl_bessel_i, cyl_bessel_j, cyl_bessel_k, cyl_hankel_1, cyl_hankel_2, cyl_neumann,
};
use dualnum_core::types::Dual;
use num_complex::Complex;
use tracing::info;

use crate::config::AppConfig;
use crate::{CliError, Result};

/// Cylinder Bessel function selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BesselKind {
    /// `J_ν`
    J,
    /// `Y_ν`
    Y,
    /// `I_ν`
    I,
    /// `K_ν`
    K,
    /// `H⁽¹⁾_ν`
    H1,
    /// `H⁽²⁾_ν`
    H2,
}

impl BesselKind {
    /// Short name as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            BesselKind::J => "j",
            BesselKind::Y => "y",
            BesselKind::I => "i",
            BesselKind::K => "k",
            BesselKind::H1 => "h1",
            BesselKind::H2 => "h2",
        }
    }
}

impl FromStr for BesselKind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "j" => Ok(BesselKind::J),
            "y" => Ok(BesselKind::Y),
            "i" => Ok(BesselKind::I),
            "k" => Ok(BesselKind::K),
            "h1" => Ok(BesselKind::H1),
            "h2" => Ok(BesselKind::H2),
            _ => Err(CliError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for BesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of a Bessel evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BesselValue {
    /// `J`, `Y`, `I` and `K`
    Real(Dual<f64>),
    /// Hankel functions
    Complex(Dual<Complex<f64>>),
}

/// Evaluate the selected function at `x` seeded as `(x, 1)`.
pub fn evaluate(kind: BesselKind, nu: f64, x: f64) -> BesselValue {
    let x = Dual::variable(x);
    match kind {
        BesselKind::J => BesselValue::Real(cyl_bessel_j(nu, x)),
        BesselKind::Y => BesselValue::Real(cyl_neumann(nu, x)),
        BesselKind::I => BesselValue::Real(cyl_bessel_i(nu, x)),
        BesselKind::K => BesselValue::Real(cyl_bessel_k(nu, x)),
        BesselKind::H1 => BesselValue::Complex(cyl_hankel_1(nu, x)),
        BesselKind::H2 => BesselValue::Complex(cyl_hankel_2(nu, x)),
    }
}

fn format_complex(z: Complex<f64>, precision: usize) -> String {
    let sign = if z.im.is_sign_negative() { '-' } else { '+' };
    format!("({:.*} {} {:.*}i)", precision, z.re, sign, precision, z.im.abs())
}

/// Render a result with the configured precision.
pub fn render(kind: BesselKind, nu: f64, x: f64, value: &BesselValue, precision: usize) -> String {
    let body = match value {
        BesselValue::Real(d) => format!("{:.*}", precision, d),
        BesselValue::Complex(d) => format!(
            "{} + {}e",
            format_complex(d.value(), precision),
            format_complex(d.derivative(), precision)
        ),
    };
    format!("{}_{}({}) = {}", kind, nu, x, body)
}

/// Run the bessel command
pub fn run(kind: &str, nu: f64, x: f64, config: &AppConfig) -> Result<()> {
    let kind: BesselKind = kind.parse()?;
    if !nu.is_finite() || !x.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "order and argument must be finite, got nu = {}, x = {}",
            nu, x
        )));
    }

    info!(kind = %kind, nu, x, "Evaluating Bessel function");
    let value = evaluate(kind, nu, x);
    println!("{}", render(kind, nu, x, &value, config.output.precision));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const J0_1: f64 = 0.7651976865579666;
    const J1_1: f64 = 0.44005058574493355;
    const Y0_1: f64 = 0.08825696421567697;
    const Y1_1: f64 = -0.7812128213002887;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("J".parse::<BesselKind>().unwrap(), BesselKind::J);
        assert_eq!("h2".parse::<BesselKind>().unwrap(), BesselKind::H2);
        assert!(matches!(
            "z".parse::<BesselKind>(),
            Err(CliError::UnknownKind(kind)) if kind == "z"
        ));
    }

    #[test]
    fn test_real_kind() {
        match evaluate(BesselKind::J, 0.0, 1.0) {
            BesselValue::Real(d) => {
                assert_relative_eq!(d.value(), J0_1, max_relative = 1e-12);
                assert_relative_eq!(d.derivative(), -J1_1, max_relative = 1e-12);
            }
            other => panic!("expected a real result, got {:?}", other),
        }
    }

    #[test]
    fn test_hankel_kind() {
        match evaluate(BesselKind::H1, 0.0, 1.0) {
            BesselValue::Complex(d) => {
                assert_relative_eq!(d.value().re, J0_1, max_relative = 1e-12);
                assert_relative_eq!(d.value().im, Y0_1, max_relative = 1e-12);
                assert_relative_eq!(d.derivative().re, -J1_1, max_relative = 1e-12);
                assert_relative_eq!(d.derivative().im, -Y1_1, max_relative = 1e-12);
            }
            other => panic!("expected a complex result, got {:?}", other),
        }
    }

    #[test]
    fn test_format_complex() {
        assert_eq!(format_complex(Complex::new(1.0, -0.5), 2), "(1.00 - 0.50i)");
        assert_eq!(format_complex(Complex::new(-1.0, 0.25), 2), "(-1.00 + 0.25i)");
    }

    #[test]
    fn test_render() {
        let value = BesselValue::Real(Dual::new(1.0, 0.0));
        assert_eq!(render(BesselKind::I, 0.0, 0.0, &value, 2), "i_0(0) = 1.00 + 0.00e");

        let value = BesselValue::Complex(Dual::new(Complex::new(1.0, 2.0), Complex::new(0.0, -1.0)));
        assert_eq!(
            render(BesselKind::H1, 1.0, 2.0, &value, 1),
            "h1_1(2) = (1.0 + 2.0i) + (0.0 - 1.0i)e"
        );
    }

    #[test]
    fn test_run_rejects_bad_input() {
        let config = AppConfig::default();
        assert!(matches!(run("q", 0.0, 1.0, &config), Err(CliError::UnknownKind(_))));
        assert!(matches!(
            run("j", 0.0, f64::NAN, &config),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(run("k", 1.0, 2.0, &config).is_ok());
    }
}
