//! Adaptive conversion to linear-linear interpolation.

use tracing::{debug, warn};

use super::interpolation_table::boundaries_for;
use super::InterpolationTable;
use crate::math::interpolators::InterpolationLaw;
use crate::math::linearisation::LinearisationConfig;
use crate::types::TableError;

impl InterpolationTable {
    /// Linearise with the default configuration (tolerance `1e-3`).
    ///
    /// # Example
    ///
    /// ```
    /// use tabulated_core::math::interpolators::InterpolationLaw;
    /// use tabulated_core::table::InterpolationTable;
    ///
    /// // y = x^2 tabulated at two points under log-log
    /// let table = InterpolationTable::with_law(
    ///     vec![1.0, 10.0],
    ///     vec![1.0, 100.0],
    ///     InterpolationLaw::LogLog,
    /// )
    /// .unwrap();
    ///
    /// let linear = table.linearise().unwrap();
    /// assert!(linear.is_linearised());
    /// assert!(linear.number_points() > 2);
    /// assert!((linear.evaluate(5.0) - 25.0).abs() < 25.0 * 1e-2);
    /// ```
    pub fn linearise(&self) -> Result<Self, TableError> {
        self.linearise_with(&LinearisationConfig::default())
    }

    /// Linearise with the default configuration and a different relative tolerance.
    pub fn linearise_with_tolerance(&self, tolerance: f64) -> Result<Self, TableError> {
        self.linearise_with(&LinearisationConfig::with_tolerance(tolerance))
    }

    /// Convert the table into an equivalent linear-linear table.
    ///
    /// Every interval governed by a non-linear law is bisected at its
    /// midpoint until the straight line between the current endpoints
    /// predicts the true value at the midpoint within
    /// `config.convergence`, until `config.max_depth` bisections, or until
    /// the interval is a few ulps wide. Once `config.max_points` points have
    /// been inserted, remaining intervals are not refined further, so the
    /// output size is bounded for any input and any configuration.
    ///
    /// - Linear-linear intervals are copied unchanged.
    /// - A histogram interval becomes a flat segment followed by a step to
    ///   the next tabulated value (no step after the last point, and none
    ///   when the two values are equal).
    /// - Discontinuities and region boundaries of the input are kept.
    ///
    /// An already linearised table is returned as is.
    ///
    /// # Errors
    ///
    /// `TableError::NonFiniteValue` if the interpolation law evaluates to
    /// an infinite or NaN value inside an interval, e.g. an interval ending
    /// at an infinite value.
    pub fn linearise_with(&self, config: &LinearisationConfig) -> Result<Self, TableError> {
        if self.is_linearised() {
            return Ok(self.clone());
        }

        let last = self.x.len() - 1;
        let mut refinement = Refinement {
            config,
            x: Vec::with_capacity(2 * self.x.len()),
            y: Vec::with_capacity(2 * self.y.len()),
            inserted: 0,
            capped: 0,
            exhausted: false,
            non_finite: None,
        };
        refinement.push(self.x[0], self.y[0]);

        for i in 0..last {
            let (x0, x1) = (self.x[i], self.x[i + 1]);
            let (y0, y1) = (self.y[i], self.y[i + 1]);

            // Zero-width step opening a region
            if x0 == x1 {
                refinement.push(x1, y1);
                continue;
            }

            match self.law_for_interval(i) {
                InterpolationLaw::LinearLinear => refinement.push(x1, y1),
                InterpolationLaw::Histogram => {
                    refinement.push(x1, y0);
                    // A tabulated step right after x1 supplies the new value itself
                    let continues = i + 1 < last && self.x[i + 2] != x1;
                    if continues && y1 != y0 {
                        refinement.push(x1, y1);
                    }
                }
                law => {
                    let segment = Segment {
                        law,
                        x0,
                        x1,
                        y0,
                        y1,
                    };
                    let capped = refinement.capped;
                    refinement.bisect(&segment, (x0, y0), (x1, y1), 0);
                    if let Some(x) = refinement.non_finite {
                        return Err(TableError::NonFiniteValue { x });
                    }
                    if refinement.capped > capped {
                        warn!(
                            x0,
                            x1,
                            %law,
                            max_depth = config.max_depth,
                            "linearisation stopped at maximum depth before convergence"
                        );
                    }
                    refinement.push(x1, y1);
                }
            }
        }

        if refinement.exhausted {
            warn!(
                max_points = config.max_points,
                "linearisation stopped at point budget before convergence"
            );
        }

        let Refinement { x, y, .. } = refinement;
        let breaks: Vec<f64> = self.interior_breaks().collect();
        let boundaries = boundaries_for(&x, &breaks);
        let laws = vec![InterpolationLaw::LinearLinear; boundaries.len()];

        debug!(
            input_points = self.number_points(),
            output_points = x.len(),
            regions = boundaries.len(),
            "linearised table"
        );

        Self::new(x, y, boundaries, laws)
    }
}

/// Sub-intervals narrower than this many ulps of their abscissa are not split.
const MIN_RELATIVE_WIDTH: f64 = 4.0 * f64::EPSILON;

/// One original interval and its interpolation law.
struct Segment {
    law: InterpolationLaw,
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

impl Segment {
    #[inline]
    fn value(&self, x: f64) -> f64 {
        self.law.interpolate(x, self.x0, self.x1, self.y0, self.y1)
    }
}

/// Points accumulated by the linearisation.
struct Refinement<'a> {
    config: &'a LinearisationConfig,
    x: Vec<f64>,
    y: Vec<f64>,
    /// Midpoints inserted so far
    inserted: usize,
    /// Sub-intervals left unconverged at the depth limit
    capped: usize,
    /// Point budget used up
    exhausted: bool,
    /// Abscissa of the first non-finite value met
    non_finite: Option<f64>,
}

impl Refinement<'_> {
    #[inline]
    fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Insert the points strictly between `left` and `right`, in order.
    fn bisect(&mut self, segment: &Segment, left: (f64, f64), right: (f64, f64), depth: u32) {
        if self.exhausted || self.non_finite.is_some() {
            return;
        }

        let (xl, yl) = left;
        let (xr, yr) = right;

        let xm = 0.5 * (xl + xr);
        let too_narrow = xr - xl <= MIN_RELATIVE_WIDTH * xl.abs().max(xr.abs());
        if !(xl < xm && xm < xr) || too_narrow {
            return;
        }

        let truth = segment.value(xm);
        if !truth.is_finite() {
            self.non_finite = Some(xm);
            return;
        }

        let trial = 0.5 * (yl + yr);
        if self.config.convergence.is_converged(trial, truth) {
            return;
        }
        if depth >= self.config.max_depth {
            self.capped += 1;
            return;
        }
        if self.inserted >= self.config.max_points {
            self.exhausted = true;
            return;
        }

        self.bisect(segment, left, (xm, truth), depth + 1);
        self.push(xm, truth);
        self.inserted += 1;
        self.bisect(segment, (xm, truth), right, depth + 1);
    }
}
