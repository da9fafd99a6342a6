//! Interpolation laws between adjacent tabulated points.

use std::fmt;

/// Rule for interpolating between two adjacent tabulated points.
///
/// Names read as "x axis, y axis":
///
/// | Law            | Linear in        |
/// |----------------|------------------|
/// | `Histogram`    | `y = y0` (step)  |
/// | `LinearLinear` | `(x, y)`         |
/// | `LinearLog`    | `(x, ln y)`      |
/// | `LogLinear`    | `(ln x, y)`      |
/// | `LogLog`       | `(ln x, ln y)`   |
///
/// # Example
///
/// ```
/// use tabulated_core::math::interpolators::InterpolationLaw;
///
/// let y = InterpolationLaw::LinearLinear.interpolate(1.5, 1.0, 2.0, 10.0, 20.0);
/// assert!((y - 15.0).abs() < 1e-12);
///
/// let y = InterpolationLaw::Histogram.interpolate(1.9, 1.0, 2.0, 10.0, 20.0);
/// assert_eq!(y, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum InterpolationLaw {
    /// Constant value `y0` over the interval.
    Histogram,
    /// Linear in x, linear in y.
    LinearLinear,
    /// Linear in x, logarithmic in y.
    LinearLog,
    /// Logarithmic in x, linear in y.
    LogLinear,
    /// Logarithmic in x, logarithmic in y.
    LogLog,
}

impl InterpolationLaw {
    /// All supported laws.
    pub const ALL: [InterpolationLaw; 5] = [
        InterpolationLaw::Histogram,
        InterpolationLaw::LinearLinear,
        InterpolationLaw::LinearLog,
        InterpolationLaw::LogLinear,
        InterpolationLaw::LogLog,
    ];

    /// Returns true if the law takes the logarithm of the independent variable.
    #[inline]
    pub fn is_log_x(&self) -> bool {
        matches!(self, InterpolationLaw::LogLinear | InterpolationLaw::LogLog)
    }

    /// Returns true if the law takes the logarithm of the dependent variable.
    #[inline]
    pub fn is_log_y(&self) -> bool {
        matches!(self, InterpolationLaw::LinearLog | InterpolationLaw::LogLog)
    }

    /// Returns true if `y` enters the law linearly, so that adding a constant
    /// to both endpoints adds the same constant to every interpolated value.
    #[inline]
    pub fn is_linear_in_y(&self) -> bool {
        !self.is_log_y()
    }

    /// Short name of the law.
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationLaw::Histogram => "histogram",
            InterpolationLaw::LinearLinear => "lin-lin",
            InterpolationLaw::LinearLog => "lin-log",
            InterpolationLaw::LogLinear => "log-lin",
            InterpolationLaw::LogLog => "log-log",
        }
    }

    /// Interpolate at `x` between `(x0, y0)` and `(x1, y1)`.
    ///
    /// Endpoints are reproduced exactly. The caller guarantees
    /// `x0 <= x <= x1` and, for logarithmic axes, strictly positive `x`
    /// and same-signed non-zero `y` values.
    ///
    /// # Formulas
    ///
    /// ```text
    /// t   = (x - x0) / (x1 - x0)              linear x
    /// t   = ln(x / x0) / ln(x1 / x0)          logarithmic x
    /// y   = y0 + (y1 - y0) * t                linear y
    /// y   = sign(y0) * exp(ln|y0| + (ln|y1| - ln|y0|) * t)
    ///                                         logarithmic y
    /// ```
    ///
    /// The logarithmic-y form works on the logarithms of the magnitudes, so
    /// values many decades apart stay finite between the endpoints.
    pub fn interpolate(&self, x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
        if x == x0 {
            return y0;
        }
        if x == x1 {
            return y1;
        }

        if let InterpolationLaw::Histogram = self {
            return y0;
        }

        let t = if self.is_log_x() {
            (x / x0).ln() / (x1 / x0).ln()
        } else {
            (x - x0) / (x1 - x0)
        };

        if self.is_log_y() {
            let (l0, l1) = (y0.abs().ln(), y1.abs().ln());
            y0.signum() * (l0 + (l1 - l0) * t).exp()
        } else {
            y0 + (y1 - y0) * t
        }
    }
}

impl fmt::Display for InterpolationLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
