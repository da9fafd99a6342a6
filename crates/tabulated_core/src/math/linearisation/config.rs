//! Linearisation configuration types.

use super::ToleranceConvergence;

/// Default maximum bisection depth per original interval.
pub const DEFAULT_MAX_DEPTH: u32 = 48;

/// Default maximum number of points inserted by one linearisation.
pub const DEFAULT_MAX_POINTS: usize = 1 << 20;

/// Configuration for adaptive linearisation.
///
/// Bundles the convergence predicate deciding when a segment is accurate
/// enough with the two limits that bound the refinement: bisection depth
/// per interval and total number of inserted points.
///
/// # Example
///
/// ```
/// use tabulated_core::math::linearisation::{LinearisationConfig, ToleranceConvergence};
///
/// // Use default configuration
/// let config = LinearisationConfig::default();
/// assert_eq!(config.convergence.tolerance, 1e-3);
/// assert_eq!(config.max_depth, 48);
///
/// // Custom configuration
/// let custom = LinearisationConfig {
///     convergence: ToleranceConvergence::new(1e-6, 1e-12),
///     max_depth: 60,
///     max_points: 10_000,
/// };
/// assert_eq!(custom.max_depth, 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinearisationConfig {
    /// Predicate comparing the linear prediction with the true value at a midpoint.
    pub convergence: ToleranceConvergence,

    /// Maximum number of bisections of a single original interval.
    ///
    /// Refinement of a segment stops at this depth even when it has not
    /// converged, so declared-smooth regions hiding a true discontinuity
    /// still terminate.
    pub max_depth: u32,

    /// Maximum number of points inserted over the whole table.
    ///
    /// Depth alone allows `2^max_depth` points per interval. Once this many
    /// points have been inserted, remaining intervals are left as straight
    /// lines between their tabulated endpoints.
    pub max_points: usize,
}

impl Default for LinearisationConfig {
    /// Default convergence (tolerance `1e-3`, threshold `1e-10`), a
    /// maximum depth of 48 and at most 2^20 inserted points.
    fn default() -> Self {
        Self {
            convergence: ToleranceConvergence::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl LinearisationConfig {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `max_depth == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use tabulated_core::math::linearisation::{LinearisationConfig, ToleranceConvergence};
    ///
    /// let config = LinearisationConfig::new(ToleranceConvergence::with_tolerance(1e-4), 32);
    /// assert_eq!(config.max_depth, 32);
    /// ```
    pub fn new(convergence: ToleranceConvergence, max_depth: u32) -> Self {
        assert!(max_depth > 0, "max_depth must be > 0");
        Self {
            convergence,
            max_depth,
            max_points: DEFAULT_MAX_POINTS,
        }
    }

    /// Same configuration with a different point budget.
    ///
    /// # Panics
    ///
    /// Panics if `max_points == 0`.
    pub fn with_max_points(self, max_points: usize) -> Self {
        assert!(max_points > 0, "max_points must be > 0");
        Self { max_points, ..self }
    }

    /// Default configuration with a different relative tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            convergence: ToleranceConvergence::with_tolerance(tolerance),
            ..Self::default()
        }
    }

    /// Tight tolerance (1e-6) for reference-quality tables.
    pub fn fine() -> Self {
        Self {
            convergence: ToleranceConvergence::new(1e-6, 1e-14),
            max_depth: 60,
            max_points: DEFAULT_MAX_POINTS,
        }
    }

    /// Relaxed tolerance (1e-2) for quick previews.
    pub fn coarse() -> Self {
        Self {
            convergence: ToleranceConvergence::new(1e-2, 1e-10),
            max_depth: 24,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LinearisationConfig::default();
        assert_eq!(config.convergence, ToleranceConvergence::default());
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_new_config() {
        let config = LinearisationConfig::new(ToleranceConvergence::new(1e-4, 1e-12), 20);
        assert_eq!(config.convergence.tolerance, 1e-4);
        assert_eq!(config.convergence.threshold, 1e-12);
        assert_eq!(config.max_depth, 20);
    }

    #[test]
    #[should_panic(expected = "max_depth must be > 0")]
    fn test_new_config_zero_depth_panics() {
        let _ = LinearisationConfig::new(ToleranceConvergence::default(), 0);
    }

    #[test]
    fn test_with_max_points() {
        let config = LinearisationConfig::coarse().with_max_points(500);
        assert_eq!(config.max_points, 500);
        assert_eq!(config.max_depth, 24);
        assert_eq!(LinearisationConfig::default().max_points, DEFAULT_MAX_POINTS);
    }

    #[test]
    #[should_panic(expected = "max_points must be > 0")]
    fn test_zero_max_points_panics() {
        let _ = LinearisationConfig::default().with_max_points(0);
    }

    #[test]
    fn test_with_tolerance() {
        let config = LinearisationConfig::with_tolerance(1e-5);
        assert_eq!(config.convergence.tolerance, 1e-5);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_presets_are_ordered() {
        let fine = LinearisationConfig::fine();
        let coarse = LinearisationConfig::coarse();
        assert!(fine.convergence.tolerance < coarse.convergence.tolerance);
        assert!(fine.max_depth > coarse.max_depth);
    }

    #[test]
    fn test_config_debug() {
        let debug_str = format!("{:?}", LinearisationConfig::default());
        assert!(debug_str.contains("LinearisationConfig"));
        assert!(debug_str.contains("max_depth"));
    }
}
