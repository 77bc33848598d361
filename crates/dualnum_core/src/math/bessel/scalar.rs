//! Real-order cylinder Bessel functions of a real argument, in `f64`.
//!
//! Values come from the `complex-bessel` crate (Amos Algorithm 644) evaluated
//! on the real axis, `z = x + 0i`, keeping the real part. Negative orders are
//! reflected there as well; integer orders use the exact sign `(−1)^n`.
//!
//! This module pins down the real-axis conventions the crate leaves to the
//! caller:
//!
//! | x | J | Y | I | K |
//! |---|---|---|---|---|
//! | `0`, `ν = 0` | `1` | `−∞` | `1` | `+∞` |
//! | `0`, `ν > 0` | `0` | `−∞` | `0` | `+∞` |
//! | `+∞` | `0` | `0` | `+∞` | `0` |
//! | `< 0` or NaN | NaN | NaN | NaN | NaN |
//!
//! At `x = 0` a negative order goes through the same reflection, which gives
//! for instance `J_{−1/2}(0) = +∞`.
//!
//! An overflowing `I`, `K` or `Y` becomes `+∞`, `+∞` or `−∞` respectively.
//! Arguments beyond about `10⁹` have no significant digits left and report
//! NaN, as do the crate's rare convergence failures.

use std::f64::consts::{FRAC_2_PI, PI};

use complex_bessel::{besseli, besselj, besselk, bessely, Error};
use num_complex::Complex;
use tracing::warn;

/// Which of the four functions is being evaluated.
#[derive(Debug, Clone, Copy)]
enum Kind {
    J,
    Y,
    I,
    K,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::J => "J",
            Kind::Y => "Y",
            Kind::I => "I",
            Kind::K => "K",
        }
    }

    /// Value at `x = 0` for `ν ≥ 0`.
    fn at_zero_nonnegative(self, nu: f64) -> f64 {
        match self {
            Kind::J | Kind::I if nu == 0.0 => 1.0,
            Kind::J | Kind::I => 0.0,
            Kind::Y => f64::NEG_INFINITY,
            Kind::K => f64::INFINITY,
        }
    }

    /// Value at `x = 0`; negative orders go through the reflection formulas.
    fn at_zero(self, nu: f64) -> f64 {
        if nu >= 0.0 {
            return self.at_zero_nonnegative(nu);
        }

        let order = -nu;
        let (j, y) = (Kind::J.at_zero_nonnegative(order), Kind::Y.at_zero_nonnegative(order));
        let (i, k) = (Kind::I.at_zero_nonnegative(order), Kind::K.at_zero_nonnegative(order));
        if order.fract() == 0.0 {
            let sign = if order % 2.0 == 0.0 { 1.0 } else { -1.0 };
            return match self {
                Kind::J => sign * j,
                Kind::Y => sign * y,
                Kind::I => i,
                Kind::K => k,
            };
        }

        let (sin, cos) = (PI * order).sin_cos();
        match self {
            Kind::J => cos * j - sin * y,
            Kind::Y => sin * j + cos * y,
            Kind::I => i + FRAC_2_PI * sin * k,
            Kind::K => k,
        }
    }

    /// Limit as `x → +∞`.
    fn at_infinity(self) -> f64 {
        match self {
            Kind::I => f64::INFINITY,
            _ => 0.0,
        }
    }

    /// Value reported when the magnitude overflows.
    fn overflowed(self) -> f64 {
        match self {
            Kind::Y => f64::NEG_INFINITY,
            Kind::I | Kind::K => f64::INFINITY,
            Kind::J => f64::NAN,
        }
    }
}

fn evaluate(kind: Kind, nu: f64, x: f64) -> f64 {
    if nu.is_nan() || x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        // the crate rejects z = 0 for Y and K, and non-integer ν < 0 for J and I
        return kind.at_zero(nu);
    }
    if x.is_infinite() {
        return kind.at_infinity();
    }

    let z = Complex::new(x, 0.0);
    let result = match kind {
        Kind::J => besselj(nu, z),
        Kind::Y => bessely(nu, z),
        Kind::I => besseli(nu, z),
        Kind::K => besselk(nu, z),
    };

    match result {
        Ok(value) => value.re,
        Err(Error::Overflow) => kind.overflowed(),
        Err(err) => {
            warn!(function = kind.name(), nu, x, error = %err, "Bessel evaluation failed");
            f64::NAN
        }
    }
}

/// `J_ν(x)`.
pub fn bessel_j(nu: f64, x: f64) -> f64 {
    evaluate(Kind::J, nu, x)
}

/// `Y_ν(x)`.
pub fn bessel_y(nu: f64, x: f64) -> f64 {
    evaluate(Kind::Y, nu, x)
}

/// `I_ν(x)`.
pub fn bessel_i(nu: f64, x: f64) -> f64 {
    evaluate(Kind::I, nu, x)
}

/// `K_ν(x)`.
pub fn bessel_k(nu: f64, x: f64) -> f64 {
    evaluate(Kind::K, nu, x)
}

/// `(J_ν(x), Y_ν(x))`.
pub fn bessel_jy(nu: f64, x: f64) -> (f64, f64) {
    (bessel_j(nu, x), bessel_y(nu, x))
}

/// `(I_ν(x), K_ν(x))`.
pub fn bessel_ik(nu: f64, x: f64) -> (f64, f64) {
    (bessel_i(nu, x), bessel_k(nu, x))
}
