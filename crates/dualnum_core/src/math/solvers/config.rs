//! Solver configuration types.

use num_traits::Float;

use crate::types::ConfigError;

/// Configuration for the Newton root finder.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use dualnum_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-15);
/// assert_eq!(config.max_iterations, 100);
///
/// let custom = SolverConfig::new(1e-12, 200).unwrap();
/// assert_eq!(custom.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig<T: Float> {
    /// Step tolerance.
    ///
    /// The solver stops when `|Δx| < tolerance · max(1, |x|)`.
    pub tolerance: T,

    /// Maximum number of Newton steps before giving up with
    /// `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: `1e-15`, or four machine epsilons when the scalar type
    ///   cannot resolve `1e-15` (`f32`)
    /// - `max_iterations`: 100
    fn default() -> Self {
        let floor = T::epsilon() + T::epsilon() + T::epsilon() + T::epsilon();
        let tolerance = T::from(DEFAULT_TOLERANCE).map_or(floor, |t| t.max(floor));
        Self {
            tolerance,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Default absolute step tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

impl<T: Float> SolverConfig<T> {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// * `ConfigError::InvalidTolerance` if `tolerance` is not positive and finite
    /// * `ConfigError::ZeroIterations` if `max_iterations == 0`
    ///
    /// # Example
    ///
    /// ```
    /// use dualnum_core::math::solvers::SolverConfig;
    /// use dualnum_core::types::ConfigError;
    ///
    /// assert_eq!(SolverConfig::new(1e-10, 0), Err(ConfigError::ZeroIterations));
    /// assert!(SolverConfig::new(-1.0, 10).is_err());
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants that [`SolverConfig::new`] enforces.
    ///
    /// Useful after deserialising a configuration whose fields were set
    /// directly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance > T::zero() && self.tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(
                self.tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-15);
        assert_eq!(config.max_iterations, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_f32_is_resolvable() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert_eq!(config.tolerance, 4.0 * f32::EPSILON);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12, 200).unwrap();
        assert_eq!(config.tolerance, 1e-12);
        assert_eq!(config.max_iterations, 200);
    }

    #[test]
    fn test_new_config_rejects_bad_tolerance() {
        assert_eq!(
            SolverConfig::new(0.0_f64, 100),
            Err(ConfigError::InvalidTolerance(0.0))
        );
        assert_eq!(
            SolverConfig::new(-1e-10_f64, 100),
            Err(ConfigError::InvalidTolerance(-1e-10))
        );
        assert!(SolverConfig::new(f64::NAN, 100).is_err());
        assert!(SolverConfig::new(f64::INFINITY, 100).is_err());
    }

    #[test]
    fn test_new_config_rejects_zero_iterations() {
        assert_eq!(
            SolverConfig::new(1e-10_f64, 0),
            Err(ConfigError::ZeroIterations)
        );
    }

    #[test]
    fn test_validate_direct_construction() {
        let config = SolverConfig {
            tolerance: 1e-8_f64,
            max_iterations: 0,
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroIterations));
    }

    #[test]
    fn test_config_copy() {
        let config1: SolverConfig<f64> = SolverConfig::default();
        let config2 = config1;
        assert_eq!(config1, config2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde_partial() {
        let config: SolverConfig<f64> =
            serde_json::from_str(r#"{"max_iterations": 7}"#).unwrap();
        assert_eq!(config.max_iterations, 7);
        assert_eq!(config.tolerance, 1e-15);
    }
}
