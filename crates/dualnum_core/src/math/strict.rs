//! Checked evaluation that reports domain violations as errors.
//!
//! The operators and [`elementary`] functions propagate NaN and infinity the
//! way IEEE-754 scalars do. The functions here compute the same results but
//! return a [`DomainError`] instead of a non-finite dual number:
//!
//! - a non-finite input is rejected with [`DomainError::NonFinite`]
//! - a finite input whose value or derivative comes out non-finite is
//!   reported as [`DomainError::OutOfDomain`] (this includes overflow, and
//!   points such as `sqrt(0)` where only the derivative is undefined)
//! - division by a dual number with zero value component is
//!   [`DomainError::ZeroDivisor`]
//!
//! ```
//! use dualnum_core::math::strict;
//! use dualnum_core::types::{DomainError, Dual};
//!
//! let ok = strict::sqrt(Dual::variable(4.0_f64)).unwrap();
//! assert_eq!(ok, Dual::new(2.0, 0.25));
//!
//! let err = strict::log(Dual::variable(-1.0_f64)).unwrap_err();
//! assert_eq!(
//!     err,
//!     DomainError::OutOfDomain { function: "log".to_string(), value: -1.0 }
//! );
//! ```

use num_traits::{Float, FloatConst};

use crate::math::elementary;
use crate::types::{DomainError, Dual};

fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

fn out_of_domain<T: Float>(function: &str, at: T) -> DomainError {
    DomainError::OutOfDomain {
        function: function.to_string(),
        value: to_f64(at),
    }
}

/// Pass `x` through unchanged if both components are finite.
///
/// # Errors
///
/// `DomainError::NonFinite` when either component is NaN or infinite.
pub fn ensure_finite<T: Float>(x: Dual<T>) -> Result<Dual<T>, DomainError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(DomainError::NonFinite {
            value: to_f64(x.value()),
            derivative: to_f64(x.derivative()),
        })
    }
}

/// `x / y`, refusing a divisor whose value component is zero.
pub fn checked_div<T: Float>(x: Dual<T>, y: Dual<T>) -> Result<Dual<T>, DomainError> {
    if y.value() == T::zero() {
        return Err(DomainError::ZeroDivisor);
    }
    Ok(x / y)
}

/// `1 / x`, refusing a zero value component.
pub fn checked_inverted<T: Float>(x: Dual<T>) -> Result<Dual<T>, DomainError> {
    if x.value() == T::zero() {
        return Err(DomainError::ZeroDivisor);
    }
    Ok(x.inverted())
}

fn checked_unary<T, G>(function: &str, x: Dual<T>, g: G) -> Result<Dual<T>, DomainError>
where
    T: Float,
    G: Fn(Dual<T>) -> Dual<T>,
{
    let x = ensure_finite(x)?;
    let y = g(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(out_of_domain(function, x.value()))
    }
}

// The bound list travels as one bracketed token tree so it can be repeated
// once per name.
macro_rules! checked_functions {
    (@one [$($bound:tt)+] $name:ident) => {
        #[doc = concat!("Checked [`elementary::", stringify!($name), "`].")]
        pub fn $name<T: $($bound)+>(x: Dual<T>) -> Result<Dual<T>, DomainError> {
            checked_unary(stringify!($name), x, elementary::$name)
        }
    };
    ($bounds:tt $($name:ident),+ $(,)?) => {
        $(checked_functions!(@one $bounds $name);)+
    };
}

checked_functions!([Float]
    sqrt, cbrt,
    sin, cos, tan, asin, acos, atan,
    sinh, cosh, tanh, asinh, acosh, atanh,
    exp, expm1, log, log1p,
);

checked_functions!([Float + FloatConst] exp2, log10, log2);

/// Checked [`elementary::atan2`]; undefined at the origin.
pub fn atan2<T: Float>(y: Dual<T>, x: Dual<T>) -> Result<Dual<T>, DomainError> {
    let (y, x) = (ensure_finite(y)?, ensure_finite(x)?);
    let r = elementary::atan2(y, x);
    if r.is_finite() {
        Ok(r)
    } else {
        Err(out_of_domain("atan2", y.value()))
    }
}

/// Checked [`elementary::pow`]; the reported value is the base.
pub fn pow<T: Float>(base: Dual<T>, exponent: Dual<T>) -> Result<Dual<T>, DomainError> {
    let (base, exponent) = (ensure_finite(base)?, ensure_finite(exponent)?);
    let r = elementary::pow(base, exponent);
    if r.is_finite() {
        Ok(r)
    } else {
        Err(out_of_domain("pow", base.value()))
    }
}

/// Checked [`elementary::powf`]; the reported value is the base.
pub fn powf<T: Float>(base: Dual<T>, exponent: T) -> Result<Dual<T>, DomainError> {
    checked_unary("powf", base, |b| elementary::powf(b, exponent))
}
