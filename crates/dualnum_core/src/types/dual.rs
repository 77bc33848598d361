//! Dual number type for forward-mode automatic differentiation.
//!
//! A [`Dual`] models the truncated Taylor expansion `a + b·ε` with `ε² = 0`.
//! The value component `a` carries the function value and the derivative
//! component `b` carries the accumulated derivative with respect to whichever
//! variable was seeded with `b = 1`.
//!
//! Every arithmetic rule below follows from expanding the product of two such
//! expansions and discarding the `ε²` term:
//!
//! - `(a + bε) + (c + dε) = (a + c) + (b + d)ε`
//! - `(a + bε) · (c + dε) = ac + (ad + bc)ε`
//! - `(a + bε) / (c + dε) = a/c + ((bc − ad)/c²)ε`
//!
//! ## Usage
//!
//! ```
//! use dualnum_core::types::Dual;
//!
//! // Seed x = 3 with dx/dx = 1
//! let x = Dual::variable(3.0_f64);
//!
//! // f(x) = x² + 2x, f'(x) = 2x + 2
//! let f = x * x + x * 2.0;
//!
//! assert_eq!(f.value(), 15.0);
//! assert_eq!(f.derivative(), 8.0);
//! ```
//!
//! ## Failure Semantics
//!
//! Nothing here panics or returns an error. Dividing by, or inverting, a dual
//! number whose value component is zero yields IEEE-754 infinities or NaNs,
//! which then propagate through later arithmetic. See
//! [`crate::math::strict`] for checked variants.

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Float, Num, One, Zero};

/// A dual number `a + b·ε` with `ε² = 0`.
///
/// Equality and ordering compare the pair `(a, b)` lexicographically and
/// exactly. Ordering carries no meaning beyond that canonical comparison; it
/// exists so that duals can live in sorted containers and generic
/// comparison-based code.
///
/// # Type Parameters
///
/// * `T` - Scalar type. Arithmetic requires `T: Num + Copy` (`f32`, `f64`,
///   `num_complex::Complex<f64>`, ...); the elementary functions in
///   [`crate::math::elementary`] require `T: Float`.
///
/// # Examples
///
/// ```
/// use dualnum_core::types::Dual;
///
/// assert!(Dual::new(1.0, 5.0) < Dual::new(2.0, 0.0));
/// assert!(Dual::new(1.0, 5.0) < Dual::new(1.0, 6.0));
/// assert!(!(Dual::new(1.0, 5.0) < Dual::new(1.0, 4.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<T> {
    a: T,
    b: T,
}

/// Single-precision dual number.
pub type DualF32 = Dual<f32>;

/// Double-precision dual number.
pub type DualF64 = Dual<f64>;

impl<T> Dual<T> {
    /// Create a dual number from its value and derivative components.
    pub const fn new(a: T, b: T) -> Self {
        Self { a, b }
    }
}

impl<T: Copy> Dual<T> {
    /// Value component `a`.
    #[inline]
    pub const fn a(&self) -> T {
        self.a
    }

    /// Derivative component `b`.
    #[inline]
    pub const fn b(&self) -> T {
        self.b
    }

    /// Value component, i.e. the plain function value.
    #[inline]
    pub const fn value(&self) -> T {
        self.a
    }

    /// Derivative component, i.e. the accumulated derivative.
    #[inline]
    pub const fn derivative(&self) -> T {
        self.b
    }

    /// Collapse to the underlying scalar, discarding the derivative.
    ///
    /// This is the explicit replacement for an implicit scalar conversion.
    #[inline]
    pub const fn into_value(self) -> T {
        self.a
    }

    /// Split into `(value, derivative)`.
    #[inline]
    pub const fn into_parts(self) -> (T, T) {
        (self.a, self.b)
    }
}

impl<T: Copy + Num> Dual<T> {
    /// A constant `(a, 0)`: its derivative with respect to anything is zero.
    ///
    /// This is the "value literal" constructor.
    #[inline]
    pub fn constant(a: T) -> Self {
        Self::new(a, T::zero())
    }

    /// The seeded variable `(a, 1)`, requesting `d/da`.
    #[inline]
    pub fn variable(a: T) -> Self {
        Self::new(a, T::one())
    }

    /// A pure infinitesimal `(0, b)`.
    ///
    /// This is the "derivative literal" constructor; `Dual::constant(x) +
    /// Dual::epsilon(y)` builds `x + yε`.
    #[inline]
    pub fn epsilon(b: T) -> Self {
        Self::new(T::zero(), b)
    }

    /// Replace `self` by its multiplicative inverse `(1/a, -b/a²)`.
    ///
    /// Undefined when `a = 0`; floating-point types then produce inf/NaN.
    #[inline]
    pub fn inverse(&mut self) {
        *self = self.inverted();
    }

    /// Multiplicative inverse `(1/a, -b/a²)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualnum_core::types::Dual;
    ///
    /// let x = Dual::new(2.0, 1.0);
    /// assert_eq!(x.inverted(), Dual::new(0.5, -0.25));
    /// ```
    #[inline]
    pub fn inverted(self) -> Self {
        Self::one() / self
    }

    /// Pre-increment: `a += 1`, derivative unchanged.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.a = self.a + T::one();
        self
    }

    /// Pre-decrement: `a -= 1`, derivative unchanged.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.a = self.a - T::one();
        self
    }

    /// Post-increment: returns the previous value, then increments.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Post-decrement: returns the previous value, then decrements.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }
}

impl<T: Copy + Neg<Output = T>> Dual<T> {
    /// Replace `self` by its conjugate `(a, -b)`.
    #[inline]
    pub fn conjugate(&mut self) {
        self.b = -self.b;
    }

    /// Conjugate `(a, -b)`. Applying it twice gives back the original.
    #[inline]
    pub fn conjugated(self) -> Self {
        Self::new(self.a, -self.b)
    }
}

impl<T: Float> Dual<T> {
    /// `true` when both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }

    /// `true` when either component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.a.is_nan() || self.b.is_nan()
    }
}

impl<T: Zero> From<T> for Dual<T> {
    /// Promote a scalar to the constant `(s, 0)`.
    fn from(a: T) -> Self {
        Self::new(a, T::zero())
    }
}

// ========================================
// Identities
// ========================================

impl<T: Copy + Num> Zero for Dual<T> {
    fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }
}

impl<T: Copy + Num> One for Dual<T> {
    fn one() -> Self {
        Self::new(T::one(), T::zero())
    }
}

// ========================================
// Dual ⊕ Dual
// ========================================

impl<T: Copy + Num> Add for Dual<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.a + rhs.a, self.b + rhs.b)
    }
}

impl<T: Copy + Num> Sub for Dual<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.a - rhs.a, self.b - rhs.b)
    }
}

impl<T: Copy + Num> Mul for Dual<T> {
    type Output = Self;

    /// `(a + bε)(c + dε) = ac + (ad + bc)ε`
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.a * rhs.a, self.a * rhs.b + self.b * rhs.a)
    }
}

impl<T: Copy + Num> Div for Dual<T> {
    type Output = Self;

    /// `(a + bε)/(c + dε) = a/c + ((bc − ad)/c²)ε`
    ///
    /// Evaluated as `q = a/c`, `(b − q·d)/c`, which reduces exactly to the
    /// scalar division rule when `d = 0`.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let quotient = self.a / rhs.a;
        Self::new(quotient, (self.b - quotient * rhs.b) / rhs.a)
    }
}

impl<T: Copy + Neg<Output = T>> Neg for Dual<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.a, -self.b)
    }
}

// ========================================
// Dual ⊕ scalar (scalar treated as (s, 0))
// ========================================

impl<T: Copy + Num> Add<T> for Dual<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.a + rhs, self.b)
    }
}

impl<T: Copy + Num> Sub<T> for Dual<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.a - rhs, self.b)
    }
}

impl<T: Copy + Num> Mul<T> for Dual<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.a * rhs, self.b * rhs)
    }
}

impl<T: Copy + Num> Div<T> for Dual<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.a / rhs, self.b / rhs)
    }
}

// Scalar on the left. Coherence rules out a blanket impl over T, so the
// primitive float types are covered explicitly.
macro_rules! impl_scalar_lhs {
    ($($t:ty),* $(,)?) => {$(
        impl Add<Dual<$t>> for $t {
            type Output = Dual<$t>;

            #[inline]
            fn add(self, rhs: Dual<$t>) -> Dual<$t> {
                Dual::constant(self) + rhs
            }
        }

        impl Sub<Dual<$t>> for $t {
            type Output = Dual<$t>;

            #[inline]
            fn sub(self, rhs: Dual<$t>) -> Dual<$t> {
                Dual::constant(self) - rhs
            }
        }

        impl Mul<Dual<$t>> for $t {
            type Output = Dual<$t>;

            #[inline]
            fn mul(self, rhs: Dual<$t>) -> Dual<$t> {
                Dual::constant(self) * rhs
            }
        }

        impl Div<Dual<$t>> for $t {
            type Output = Dual<$t>;

            #[inline]
            fn div(self, rhs: Dual<$t>) -> Dual<$t> {
                Dual::constant(self) / rhs
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);

// ========================================
// Compound assignment
// ========================================

impl<T: Copy + Num> AddAssign for Dual<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Copy + Num> SubAssign for Dual<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Copy + Num> MulAssign for Dual<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Copy + Num> DivAssign for Dual<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Copy + Num> AddAssign<T> for Dual<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.a = self.a + rhs;
    }
}

impl<T: Copy + Num> SubAssign<T> for Dual<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.a = self.a - rhs;
    }
}

impl<T: Copy + Num> MulAssign<T> for Dual<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Copy + Num> DivAssign<T> for Dual<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// ========================================
// Folding
// ========================================

impl<T: Copy + Num> Sum for Dual<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, T: Copy + Num> Sum<&'a Dual<T>> for Dual<T> {
    fn sum<I: Iterator<Item = &'a Dual<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + *x)
    }
}

impl<T: Copy + Num> Product for Dual<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a, T: Copy + Num> Product<&'a Dual<T>> for Dual<T> {
    fn product<I: Iterator<Item = &'a Dual<T>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * *x)
    }
}

impl<T: fmt::Display> fmt::Display for Dual<T> {
    /// Renders as `"<a> + <b>e"`, honouring a requested precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} + {:.*}e", p, self.a, p, self.b),
            None => write!(f, "{} + {}e", self.a, self.b),
        }
    }
}
