//! Cylinder Bessel functions of a dual argument.
//!
//! The order `ν` is a plain scalar; only the argument carries a derivative.
//! Derivatives come from the standard recurrences:
//!
//! | function | `d/dx` at `ν = 0` | `d/dx` otherwise |
//! |---|---|---|
//! | `J`, `Y`, `H⁽¹⁾`, `H⁽²⁾` | `−Z₁` | `½(Z_{ν−1} − Z_{ν+1})` |
//! | `I` | `I₁` | `½(I_{ν−1} + I_{ν+1})` |
//! | `K` | `−K₁` | `−½(K_{ν−1} + K_{ν+1})` |
//!
//! The Hankel functions `H⁽¹⁾ = J + iY` and `H⁽²⁾ = J − iY` return a dual
//! number over `Complex<T>`.
//!
//! # Example
//!
//! ```
//! use dualnum_core::math::bessel::{cyl_bessel_i, cyl_bessel_j};
//! use dualnum_core::types::Dual;
//!
//! let x = Dual::variable(1.0_f64);
//! let j0 = cyl_bessel_j(0.0, x);
//! let j1 = cyl_bessel_j(1.0, x);
//! assert!((j0.derivative() + j1.value()).abs() < 1e-14);
//!
//! let i0 = cyl_bessel_i(0.0, x);
//! assert!((i0.derivative() - cyl_bessel_i(1.0, x).value()).abs() < 1e-14);
//! ```

pub mod scalar;

use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::Float;

use crate::types::Dual;

/// Scalar types with real-order Bessel function evaluators.
///
/// Implemented for `f64` directly and for `f32` by evaluating in `f64`.
pub trait BesselScalar: Float {
    /// `J_ν(x)`.
    fn bessel_j(nu: Self, x: Self) -> Self;
    /// `Y_ν(x)`.
    fn bessel_y(nu: Self, x: Self) -> Self;
    /// `I_ν(x)`.
    fn bessel_i(nu: Self, x: Self) -> Self;
    /// `K_ν(x)`.
    fn bessel_k(nu: Self, x: Self) -> Self;
}

impl BesselScalar for f64 {
    fn bessel_j(nu: f64, x: f64) -> f64 {
        scalar::bessel_j(nu, x)
    }

    fn bessel_y(nu: f64, x: f64) -> f64 {
        scalar::bessel_y(nu, x)
    }

    fn bessel_i(nu: f64, x: f64) -> f64 {
        scalar::bessel_i(nu, x)
    }

    fn bessel_k(nu: f64, x: f64) -> f64 {
        scalar::bessel_k(nu, x)
    }
}

impl BesselScalar for f32 {
    fn bessel_j(nu: f32, x: f32) -> f32 {
        scalar::bessel_j(f64::from(nu), f64::from(x)) as f32
    }

    fn bessel_y(nu: f32, x: f32) -> f32 {
        scalar::bessel_y(f64::from(nu), f64::from(x)) as f32
    }

    fn bessel_i(nu: f32, x: f32) -> f32 {
        scalar::bessel_i(f64::from(nu), f64::from(x)) as f32
    }

    fn bessel_k(nu: f32, x: f32) -> f32 {
        scalar::bessel_k(f64::from(nu), f64::from(x)) as f32
    }
}

/// Which recurrence a cylinder function obeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CylinderFamily {
    /// `J`, `Y` and the Hankel functions: `Z' = ½(Z_{ν−1} − Z_{ν+1})`.
    Standard,
    /// `I` (and `K` up to sign): `Z' = ½(Z_{ν−1} + Z_{ν+1})`.
    Modified,
}

/// Lift a scalar cylinder function to a dual argument.
///
/// `eval(ν, a)` computes the function at order `ν`. It is called for the
/// value and then for the neighbouring orders (only `ν = 1` when `ν = 0`).
/// The result type `R` may differ from `T`, which is how the Hankel functions
/// produce complex values from a real argument.
pub fn with_recurrence<T, R, F>(family: CylinderFamily, nu: T, x: Dual<T>, eval: F) -> Dual<R>
where
    T: Float,
    R: Copy + Add<Output = R> + Sub<Output = R> + Neg<Output = R> + Mul<T, Output = R>,
    F: Fn(T, T) -> R,
{
    let a = x.value();
    let value = eval(nu, a);

    let slope = if nu == T::zero() {
        let first = eval(T::one(), a);
        match family {
            CylinderFamily::Standard => -first,
            CylinderFamily::Modified => first,
        }
    } else {
        let half = (T::one() + T::one()).recip();
        let lower = eval(nu - T::one(), a);
        let upper = eval(nu + T::one(), a);
        match family {
            CylinderFamily::Standard => (lower - upper) * half,
            CylinderFamily::Modified => (lower + upper) * half,
        }
    };

    Dual::new(value, slope * x.derivative())
}

/// Bessel function of the first kind `J_ν`.
pub fn cyl_bessel_j<T: BesselScalar>(nu: T, x: Dual<T>) -> Dual<T> {
    with_recurrence(CylinderFamily::Standard, nu, x, T::bessel_j)
}

/// Bessel function of the second kind (Neumann function) `Y_ν`.
pub fn cyl_neumann<T: BesselScalar>(nu: T, x: Dual<T>) -> Dual<T> {
    with_recurrence(CylinderFamily::Standard, nu, x, T::bessel_y)
}

/// Hankel function of the first kind `H⁽¹⁾_ν = J_ν + iY_ν`.
pub fn cyl_hankel_1<T: BesselScalar>(nu: T, x: Dual<T>) -> Dual<Complex<T>> {
    with_recurrence(CylinderFamily::Standard, nu, x, |n, a| {
        Complex::new(T::bessel_j(n, a), T::bessel_y(n, a))
    })
}

/// Hankel function of the second kind `H⁽²⁾_ν = J_ν − iY_ν`.
pub fn cyl_hankel_2<T: BesselScalar>(nu: T, x: Dual<T>) -> Dual<Complex<T>> {
    with_recurrence(CylinderFamily::Standard, nu, x, |n, a| {
        Complex::new(T::bessel_j(n, a), -T::bessel_y(n, a))
    })
}

/// Modified Bessel function of the first kind `I_ν`.
pub fn cyl_bessel_i<T: BesselScalar>(nu: T, x: Dual<T>) -> Dual<T> {
    with_recurrence(CylinderFamily::Modified, nu, x, T::bessel_i)
}

/// Modified Bessel function of the second kind `K_ν`.
///
/// `K` satisfies the modified recurrence with the opposite sign, so the
/// derivative of the modified-family lift is negated.
pub fn cyl_bessel_k<T: BesselScalar>(nu: T, x: Dual<T>) -> Dual<T> {
    with_recurrence(CylinderFamily::Modified, nu, x, T::bessel_k).conjugated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    type Lifted = fn(f64, Dual<f64>) -> Dual<f64>;
    type Plain = fn(f64, f64) -> f64;

    fn central_difference(f: impl Fn(f64) -> f64, a: f64) -> f64 {
        let h = 1e-5;
        (f(a + h) - f(a - h)) / (2.0 * h)
    }

    fn lifted(name: &'static str, g: Lifted, s: Plain) -> (&'static str, Lifted, Plain) {
        (name, g, s)
    }

    #[test]
    fn test_derivatives_match_central_difference() {
        let functions = [
            lifted("J", cyl_bessel_j, scalar::bessel_j),
            lifted("Y", cyl_neumann, scalar::bessel_y),
            lifted("I", cyl_bessel_i, scalar::bessel_i),
            lifted("K", cyl_bessel_k, scalar::bessel_k),
        ];
        for (name, g, s) in functions {
            for &nu in &[0.0, 1.0, 2.0, 3.0, 0.5] {
                for &a in &[0.5, 1.0, 2.5, 7.0] {
                    let y = g(nu, Dual::variable(a));
                    assert_eq!(y.value(), s(nu, a), "{} value", name);
                    let fd = central_difference(|t| s(nu, t), a);
                    assert_relative_eq!(y.derivative(), fd, epsilon = 1e-8, max_relative = 1e-7);
                }
            }
        }
    }

    #[test]
    fn test_order_zero_identities() {
        let x = Dual::variable(1.3_f64);
        assert_eq!(
            cyl_bessel_j(0.0, x).derivative(),
            -scalar::bessel_j(1.0, 1.3)
        );
        assert_eq!(cyl_neumann(0.0, x).derivative(), -scalar::bessel_y(1.0, 1.3));
        assert_eq!(cyl_bessel_i(0.0, x).derivative(), scalar::bessel_i(1.0, 1.3));
        assert_eq!(cyl_bessel_k(0.0, x).derivative(), -scalar::bessel_k(1.0, 1.3));
    }

    #[test]
    fn test_half_order_derivative_closed_form() {
        // J_{1/2}(x) = sqrt(2/(πx)) sin x
        let a = 2.2_f64;
        let pi = std::f64::consts::PI;
        let expected = (2.0 / pi).sqrt() * (a.cos() / a.sqrt() - 0.5 * a.sin() / a.powf(1.5));
        let j = cyl_bessel_j(0.5, Dual::variable(a));
        assert_relative_eq!(j.derivative(), expected, max_relative = 1e-10);
    }

    #[test]
    fn test_derivative_scales_with_seed() {
        let seeded = cyl_bessel_k(1.5, Dual::new(2.0_f64, 1.0));
        let scaled = cyl_bessel_k(1.5, Dual::new(2.0_f64, -3.0));
        assert_eq!(seeded.value(), scaled.value());
        assert_relative_eq!(scaled.derivative(), -3.0 * seeded.derivative(), max_relative = 1e-15);

        let constant = cyl_bessel_j(2.0, Dual::constant(4.0_f64));
        assert_eq!(constant.derivative(), 0.0);
    }

    #[test]
    fn test_hankel_components() {
        let (nu, a) = (1.0_f64, 3.0_f64);
        let x = Dual::variable(a);
        let j = cyl_bessel_j(nu, x);
        let y = cyl_neumann(nu, x);

        let h1 = cyl_hankel_1(nu, x);
        assert_eq!(h1.value(), Complex::new(j.value(), y.value()));
        assert_eq!(h1.derivative(), Complex::new(j.derivative(), y.derivative()));

        let h2 = cyl_hankel_2(nu, x);
        assert_eq!(h2.value(), Complex::new(j.value(), -y.value()));
        assert_eq!(h2.derivative(), Complex::new(j.derivative(), -y.derivative()));
    }

    #[test]
    fn test_hankel_order_zero() {
        let h1 = cyl_hankel_1(0.0, Dual::variable(2.0_f64));
        let expected = -Complex::new(scalar::bessel_j(1.0, 2.0), scalar::bessel_y(1.0, 2.0));
        assert_eq!(h1.derivative(), expected);
    }

    #[test]
    fn test_negative_argument_is_nan() {
        let j = cyl_bessel_j(1.0, Dual::variable(-1.0_f64));
        assert!(j.value().is_nan());
        assert!(j.derivative().is_nan());
    }

    #[test]
    fn test_f32_instantiation() {
        let j = cyl_bessel_j(0.0_f32, Dual::variable(1.0_f32));
        assert_relative_eq!(j.value(), 0.765_197_7_f32, max_relative = 1e-6);
        assert_relative_eq!(j.derivative(), -0.440_050_6_f32, max_relative = 1e-6);

        let h = cyl_hankel_2(1.0_f32, Dual::variable(1.0_f32));
        assert_relative_eq!(h.value().im, 0.781_212_8_f32, max_relative = 1e-6);
    }
}
