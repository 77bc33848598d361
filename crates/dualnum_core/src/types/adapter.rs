//! Conversion adapter for foreign two-component numeric types.
//!
//! [`DualComponents`] is the single extensibility seam through which a value
//! of some externally defined type can be turned into a [`Dual`]. An
//! implementation exposes two pure accessors: which component plays the role
//! of the value `a`, and which plays the role of the derivative `b`.
//! Dispatch is fully static.
//!
//! ## Provided Implementations
//!
//! | Source type | value | derivative |
//! |---|---|---|
//! | `Dual<T>` | `a` | `b` |
//! | `(T, T)` | `.0` | `.1` |
//! | `num_complex::Complex<T>` | `re` | `im` |
//! | `num_dual::Dual64` / `Dual32` (`num-dual-mode`) | `re` | `eps` |
//!
//! The complex mapping is a convenience only. A complex number `re + i·im`
//! obeys `i² = −1`, not `ε² = 0`, so the converted dual does not represent the
//! same algebraic quantity; it merely reuses the two slots.
//!
//! ```
//! use dualnum_core::types::Dual;
//! use num_complex::Complex;
//!
//! let z = Complex::new(1.0, 2.0);
//! let d: Dual<f64> = Dual::from_components(&z);
//! assert_eq!(d, Dual::new(1.0, 2.0));
//! ```

use num_complex::Complex;

use super::Dual;

/// Access to the value and derivative components of a foreign type.
pub trait DualComponents {
    /// Scalar type of both components.
    type Scalar;

    /// Component mapped onto the dual value `a`.
    fn value_part(&self) -> Self::Scalar;

    /// Component mapped onto the dual derivative `b`.
    fn derivative_part(&self) -> Self::Scalar;
}

impl<T: Copy> DualComponents for Dual<T> {
    type Scalar = T;

    fn value_part(&self) -> T {
        self.a()
    }

    fn derivative_part(&self) -> T {
        self.b()
    }
}

impl<T: Copy> DualComponents for (T, T) {
    type Scalar = T;

    fn value_part(&self) -> T {
        self.0
    }

    fn derivative_part(&self) -> T {
        self.1
    }
}

impl<T: Copy> DualComponents for Complex<T> {
    type Scalar = T;

    fn value_part(&self) -> T {
        self.re
    }

    fn derivative_part(&self) -> T {
        self.im
    }
}

#[cfg(feature = "num-dual-mode")]
impl DualComponents for num_dual::Dual64 {
    type Scalar = f64;

    fn value_part(&self) -> f64 {
        self.re
    }

    fn derivative_part(&self) -> f64 {
        self.eps
    }
}

#[cfg(feature = "num-dual-mode")]
impl DualComponents for num_dual::Dual32 {
    type Scalar = f32;

    fn value_part(&self) -> f32 {
        self.re
    }

    fn derivative_part(&self) -> f32 {
        self.eps
    }
}

impl<T> Dual<T> {
    /// Build a dual number from any type implementing [`DualComponents`].
    ///
    /// The source scalar may differ from `T` as long as it converts
    /// losslessly (`f32` components into a `Dual<f64>`, for example).
    ///
    /// # Examples
    ///
    /// ```
    /// use dualnum_core::types::Dual;
    /// use num_complex::Complex;
    ///
    /// let z = Complex::new(1.5_f32, -0.5_f32);
    /// let d: Dual<f64> = Dual::from_components(&z);
    /// assert_eq!(d, Dual::new(1.5, -0.5));
    /// ```
    pub fn from_components<C>(other: &C) -> Self
    where
        C: DualComponents,
        C::Scalar: Into<T>,
    {
        Self::new(other.value_part().into(), other.derivative_part().into())
    }
}

impl<T: Copy> From<Complex<T>> for Dual<T> {
    /// Real part to value, imaginary part to derivative.
    fn from(z: Complex<T>) -> Self {
        Self::from_components(&z)
    }
}

impl<T: Copy> From<(T, T)> for Dual<T> {
    fn from(parts: (T, T)) -> Self {
        Self::from_components(&parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_complex() {
        let z = Complex::new(1.0, 2.0);
        assert_eq!(Dual::<f64>::from(z), Dual::new(1.0, 2.0));
        assert_eq!(Dual::<f64>::from_components(&z), Dual::new(1.0, 2.0));
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Dual::<f64>::from((3.0, -1.0)), Dual::new(3.0, -1.0));
    }

    #[test]
    fn test_widening_conversion() {
        let d32 = Dual::new(0.5_f32, 0.25_f32);
        let d64: Dual<f64> = Dual::from_components(&d32);
        assert_eq!(d64, Dual::new(0.5, 0.25));
    }

    #[test]
    fn test_custom_adapter() {
        struct Jet {
            primal: f64,
            tangent: f64,
        }

        impl DualComponents for Jet {
            type Scalar = f64;

            fn value_part(&self) -> f64 {
                self.primal
            }

            fn derivative_part(&self) -> f64 {
                self.tangent
            }
        }

        let jet = Jet {
            primal: 2.0,
            tangent: 7.0,
        };
        assert_eq!(Dual::<f64>::from_components(&jet), Dual::new(2.0, 7.0));
    }

    #[cfg(feature = "num-dual-mode")]
    #[test]
    fn test_from_num_dual() {
        let nd = num_dual::Dual64::new(3.0, 1.0);
        assert_eq!(Dual::<f64>::from_components(&nd), Dual::new(3.0, 1.0));

        let nd32 = num_dual::Dual32::new(3.0, 1.0);
        assert_eq!(Dual::<f32>::from_components(&nd32), Dual::new(3.0, 1.0));
    }
}
