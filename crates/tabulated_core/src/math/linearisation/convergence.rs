//! Convergence predicate for adaptive refinement.

/// Default relative tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Default absolute threshold.
pub const DEFAULT_THRESHOLD: f64 = 1e-10;

/// Relative-tolerance convergence test with an absolute floor.
///
/// A trial value converges to a reference value when
///
/// ```text
/// |trial - reference| < (|trial| + |reference|) * tolerance
/// ```
///
/// unless the right-hand side falls below `threshold`, in which case the
/// difference is compared against `threshold` instead. Identical values
/// always converge, and so do two values that are both below the smallest
/// normal `f64`, which keeps near-zero data with a zero threshold from
/// subdividing forever.
///
/// No validation happens on construction. A NaN tolerance makes the
/// comparison undefined; it then reports convergence, so refinement never
/// continues on a NaN.
///
/// # Example
///
/// ```
/// use tabulated_core::math::linearisation::ToleranceConvergence;
///
/// let convergence = ToleranceConvergence::default();
/// assert!(convergence.is_converged(1.0005, 1.0));
/// assert!(!convergence.is_converged(1.01, 1.0));
///
/// // Near zero the absolute threshold takes over
/// assert!(convergence.is_converged(1e-12, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToleranceConvergence {
    /// Relative tolerance.
    pub tolerance: f64,
    /// Absolute floor used when the relative bound becomes too small.
    pub threshold: f64,
}

impl Default for ToleranceConvergence {
    /// Tolerance `1e-3`, threshold `1e-10`.
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ToleranceConvergence {
    /// Create a predicate with the given relative tolerance and absolute threshold.
    pub fn new(tolerance: f64, threshold: f64) -> Self {
        Self {
            tolerance,
            threshold,
        }
    }

    /// Create a predicate with the given relative tolerance and the default threshold.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Decide whether `trial` is close enough to `reference`.
    #[inline]
    pub fn is_converged(&self, trial: f64, reference: f64) -> bool {
        let difference = (trial - reference).abs();
        if difference == 0.0 {
            return true;
        }

        if trial.abs() < f64::MIN_POSITIVE && reference.abs() < f64::MIN_POSITIVE {
            return true;
        }

        let bound = (trial.abs() + reference.abs()) * self.tolerance;
        let limit = if bound < self.threshold {
            self.threshold
        } else {
            bound
        };
        // Written so that NaN compares as converged
        !(difference >= limit)
    }
}
