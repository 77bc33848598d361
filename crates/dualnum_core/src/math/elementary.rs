//! Elementary functions on dual numbers.
//!
//! Each function `g` maps `x = (a, b)` to `(g(a), g'(a)·b)`: the plain
//! function evaluated at the value component, and its derivative at that
//! point multiplied by the incoming derivative (chain rule).
//!
//! | function | g'(a) |
//! |---|---|
//! | `sqrt` | `1/(2·sqrt(a))` |
//! | `cbrt` | `1/(3·cbrt(a)²)` |
//! | `sin` / `cos` | `cos(a)` / `-sin(a)` |
//! | `tan` | `1/cos(a)²` |
//! | `asin` / `acos` | `±1/sqrt(1-a²)` |
//! | `atan` | `1/(1+a²)` |
//! | `sinh` / `cosh` | `cosh(a)` / `sinh(a)` |
//! | `tanh` | `1/cosh(a)²` |
//! | `asinh` | `1/sqrt(1+a²)` |
//! | `acosh` | `1/sqrt(a²-1)` |
//! | `atanh` | `1/(1-a²)` |
//! | `exp` / `expm1` | `exp(a)` |
//! | `exp2` | `exp2(a)·ln2` |
//! | `log` | `1/a` |
//! | `log1p` | `1/(1+a)` |
//! | `log10` | `1/(a·ln10)` |
//! | `log2` | `1/(a·ln2)` |
//!
//! Domain restrictions are inherited from the scalar functions: `asin(2)`
//! is NaN, `log(0)` is `-inf`, and so on. Nothing here raises an error.
//!
//! All functions are also available as methods (`x.sin()`); the natural
//! logarithm method is spelled `ln` to match the scalar float API.
//!
//! ```
//! use dualnum_core::math::elementary::{pow, sin};
//! use dualnum_core::types::Dual;
//!
//! let x = Dual::variable(0.0_f64);
//! assert_eq!(sin(x), Dual::new(0.0, 1.0));
//!
//! let cube = Dual::new(2.0_f64, 1.0).powf(3.0);
//! assert_eq!(cube, Dual::new(8.0, 12.0));
//! # let _ = pow(x, x);
//! ```

use num_traits::{Float, FloatConst};

use crate::types::Dual;

/// `(value, slope · b)`: the chain rule applied to the incoming derivative.
#[inline]
fn chain<T: Float>(x: Dual<T>, value: T, slope: T) -> Dual<T> {
    Dual::new(value, slope * x.derivative())
}

// ========================================
// Roots
// ========================================

/// Square root; derivative `b / (2·sqrt(a))`.
pub fn sqrt<T: Float>(x: Dual<T>) -> Dual<T> {
    let root = x.value().sqrt();
    Dual::new(root, x.derivative() / (root + root))
}

/// Cube root; derivative `b / (3·cbrt(a)²)`.
pub fn cbrt<T: Float>(x: Dual<T>) -> Dual<T> {
    let root = x.value().cbrt();
    let squared = root * root;
    Dual::new(root, x.derivative() / (squared + squared + squared))
}

// ========================================
// Trigonometric
// ========================================

/// Sine; derivative `cos(a)·b`.
pub fn sin<T: Float>(x: Dual<T>) -> Dual<T> {
    let (s, c) = x.value().sin_cos();
    chain(x, s, c)
}

/// Cosine; derivative `-sin(a)·b`.
pub fn cos<T: Float>(x: Dual<T>) -> Dual<T> {
    let (s, c) = x.value().sin_cos();
    chain(x, c, -s)
}

/// Tangent; derivative `b / cos(a)²`.
pub fn tan<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    let c = a.cos();
    Dual::new(a.tan(), x.derivative() / (c * c))
}

/// Arcsine; derivative `b / sqrt(1 - a²)`.
pub fn asin<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.asin(), x.derivative() / (T::one() - a * a).sqrt())
}

/// Arccosine; derivative `-b / sqrt(1 - a²)`.
pub fn acos<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.acos(), -x.derivative() / (T::one() - a * a).sqrt())
}

/// Arctangent; derivative `b / (1 + a²)`.
pub fn atan<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.atan(), x.derivative() / (T::one() + a * a))
}

/// Four-quadrant arctangent of `y / x`.
///
/// Value `atan2(y.a, x.a)`, derivative
/// `(x.a·y.b − y.a·x.b) / (x.a² + y.a²)`.
pub fn atan2<T: Float>(y: Dual<T>, x: Dual<T>) -> Dual<T> {
    let (ya, xa) = (y.value(), x.value());
    let sumsq_inv = (xa * xa + ya * ya).recip();
    Dual::new(
        ya.atan2(xa),
        sumsq_inv * (xa * y.derivative() - ya * x.derivative()),
    )
}

// ========================================
// Hyperbolic
// ========================================

/// Hyperbolic sine; derivative `cosh(a)·b`.
pub fn sinh<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    chain(x, a.sinh(), a.cosh())
}

/// Hyperbolic cosine; derivative `sinh(a)·b`.
pub fn cosh<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    chain(x, a.cosh(), a.sinh())
}

/// Hyperbolic tangent; derivative `b / cosh(a)²`.
pub fn tanh<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    let c = a.cosh();
    Dual::new(a.tanh(), x.derivative() / (c * c))
}

/// Inverse hyperbolic sine; derivative `b / sqrt(1 + a²)`.
pub fn asinh<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.asinh(), x.derivative() / (T::one() + a * a).sqrt())
}

/// Inverse hyperbolic cosine; derivative `b / sqrt(a² - 1)`.
pub fn acosh<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.acosh(), x.derivative() / (a * a - T::one()).sqrt())
}

/// Inverse hyperbolic tangent; derivative `b / (1 - a²)`.
pub fn atanh<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.atanh(), x.derivative() / (T::one() - a * a))
}

// ========================================
// Exponential and logarithmic
// ========================================

/// Natural exponential; derivative `exp(a)·b`.
pub fn exp<T: Float>(x: Dual<T>) -> Dual<T> {
    let e = x.value().exp();
    chain(x, e, e)
}

/// Base-2 exponential; derivative `exp2(a)·ln2·b`.
pub fn exp2<T: Float + FloatConst>(x: Dual<T>) -> Dual<T> {
    let e = x.value().exp2();
    chain(x, e, e * T::LN_2())
}

/// `exp(a) - 1`, accurate near zero; derivative `exp(a)·b`.
pub fn expm1<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    chain(x, a.exp_m1(), a.exp())
}

/// Natural logarithm; derivative `b / a`.
pub fn log<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.ln(), x.derivative() / a)
}

/// `ln(1 + a)`, accurate near zero; derivative `b / (1 + a)`.
pub fn log1p<T: Float>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.ln_1p(), x.derivative() / (T::one() + a))
}

/// Base-10 logarithm; derivative `b / (a·ln10)`.
pub fn log10<T: Float + FloatConst>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.log10(), x.derivative() / (a * T::LN_10()))
}

/// Base-2 logarithm; derivative `b / (a·ln2)`.
pub fn log2<T: Float + FloatConst>(x: Dual<T>) -> Dual<T> {
    let a = x.value();
    Dual::new(a.log2(), x.derivative() / (a * T::LN_2()))
}

// ========================================
// Powers
// ========================================

/// `base^exponent` with both operands dual.
///
/// The derivative sums the partial with respect to the base,
/// `exponent·base^(exponent−1)`, weighted by `base.b`, and the partial with
/// respect to the exponent, `result·ln(base)`, weighted by `exponent.b`.
/// A term whose weight is exactly zero is skipped, so a constant exponent on
/// a negative base keeps a finite derivative instead of `ln(a)·0 = NaN`.
pub fn pow<T: Float>(base: Dual<T>, exponent: Dual<T>) -> Dual<T> {
    let (a, c) = (base.value(), exponent.value());
    let value = a.powf(c);

    let mut derivative = T::zero();
    if base.derivative() != T::zero() {
        derivative = derivative + c * a.powf(c - T::one()) * base.derivative();
    }
    if exponent.derivative() != T::zero() {
        derivative = derivative + value * a.ln() * exponent.derivative();
    }
    Dual::new(value, derivative)
}

/// Scalar base raised to a dual exponent; derivative `result·ln(base)·b`.
pub fn scalar_pow<T: Float>(base: T, exponent: Dual<T>) -> Dual<T> {
    let value = base.powf(exponent.value());
    chain(exponent, value, value * base.ln())
}

/// Dual base raised to a scalar exponent; derivative
/// `exponent·b·a^(exponent−1)`.
pub fn powf<T: Float>(base: Dual<T>, exponent: T) -> Dual<T> {
    let a = base.value();
    chain(base, a.powf(exponent), exponent * a.powf(exponent - T::one()))
}

/// Dual base raised to an integer exponent; derivative `n·b·a^(n−1)`.
pub fn powi<T: Float>(base: Dual<T>, n: i32) -> Dual<T> {
    let a = base.value();
    let n_t = T::from(n).unwrap_or_else(T::nan);
    chain(base, a.powi(n), n_t * a.powi(n - 1))
}

// ========================================
// Method forms
// ========================================

impl<T: Float> Dual<T> {
    /// See [`sqrt`].
    #[inline]
    pub fn sqrt(self) -> Self {
        sqrt(self)
    }

    /// See [`cbrt`].
    #[inline]
    pub fn cbrt(self) -> Self {
        cbrt(self)
    }

    /// See [`sin`].
    #[inline]
    pub fn sin(self) -> Self {
        sin(self)
    }

    /// See [`cos`].
    #[inline]
    pub fn cos(self) -> Self {
        cos(self)
    }

    /// See [`tan`].
    #[inline]
    pub fn tan(self) -> Self {
        tan(self)
    }

    /// See [`asin`].
    #[inline]
    pub fn asin(self) -> Self {
        asin(self)
    }

    /// See [`acos`].
    #[inline]
    pub fn acos(self) -> Self {
        acos(self)
    }

    /// See [`atan`].
    #[inline]
    pub fn atan(self) -> Self {
        atan(self)
    }

    /// `atan2(self, x)`; see [`atan2`].
    #[inline]
    pub fn atan2(self, x: Self) -> Self {
        atan2(self, x)
    }

    /// See [`sinh`].
    #[inline]
    pub fn sinh(self) -> Self {
        sinh(self)
    }

    /// See [`cosh`].
    #[inline]
    pub fn cosh(self) -> Self {
        cosh(self)
    }

    /// See [`tanh`].
    #[inline]
    pub fn tanh(self) -> Self {
        tanh(self)
    }

    /// See [`asinh`].
    #[inline]
    pub fn asinh(self) -> Self {
        asinh(self)
    }

    /// See [`acosh`].
    #[inline]
    pub fn acosh(self) -> Self {
        acosh(self)
    }

    /// See [`atanh`].
    #[inline]
    pub fn atanh(self) -> Self {
        atanh(self)
    }

    /// See [`exp`].
    #[inline]
    pub fn exp(self) -> Self {
        exp(self)
    }

    /// See [`expm1`].
    #[inline]
    pub fn exp_m1(self) -> Self {
        expm1(self)
    }

    /// Natural logarithm; see [`log`].
    #[inline]
    pub fn ln(self) -> Self {
        log(self)
    }

    /// See [`log1p`].
    #[inline]
    pub fn ln_1p(self) -> Self {
        log1p(self)
    }

    /// See [`pow`].
    #[inline]
    pub fn pow(self, exponent: Self) -> Self {
        pow(self, exponent)
    }

    /// See [`powf`].
    #[inline]
    pub fn powf(self, exponent: T) -> Self {
        powf(self, exponent)
    }

    /// See [`powi`].
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        powi(self, n)
    }
}

impl<T: Float + FloatConst> Dual<T> {
    /// See [`exp2`].
    #[inline]
    pub fn exp2(self) -> Self {
        exp2(self)
    }

    /// See [`log10`].
    #[inline]
    pub fn log10(self) -> Self {
        log10(self)
    }

    /// See [`log2`].
    #[inline]
    pub fn log2(self) -> Self {
        log2(self)
    }
}
