//! Pointwise evaluation of tables.

use super::InterpolationTable;

impl InterpolationTable {
    /// Evaluate the table at `x`.
    ///
    /// Uses binary search (O(log n)) to locate the bracketing interval and
    /// applies the interpolation law of the region that owns it. Grid
    /// values are reproduced exactly. Outside `[lower_limit, upper_limit]`
    /// the table is zero. At a discontinuity the value on the high side of
    /// the step is returned, i.e. the value that opens the next region.
    ///
    /// # Example
    ///
    /// ```
    /// use tabulated_core::math::interpolators::InterpolationLaw;
    /// use tabulated_core::table::InterpolationTable;
    ///
    /// let table = InterpolationTable::with_law(
    ///     vec![1.0, 2.0, 3.0, 4.0],
    ///     vec![4.0, 3.0, 2.0, 1.0],
    ///     InterpolationLaw::LinearLinear,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(table.evaluate(2.0), 3.0);
    /// assert!((table.evaluate(2.5) - 2.5).abs() < 1e-12);
    /// assert_eq!(table.evaluate(0.5), 0.0);
    /// assert_eq!(table.evaluate(5.0), 0.0);
    /// ```
    pub fn evaluate(&self, x: f64) -> f64 {
        let last = self.x.len() - 1;

        // `!(..)` also sends NaN to zero
        if !(self.x[0] <= x && x <= self.x[last]) {
            return 0.0;
        }
        if x == self.x[last] {
            return self.y[last];
        }

        // First index with x[i] > x; lies in 1..=last here
        let i = self.x.partition_point(|&xi| xi <= x) - 1;
        self.evaluate_interval(i, x)
    }

    /// Evaluate the table at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Interpolate inside the interval `[x[i], x[i + 1]]`.
    #[inline]
    pub(crate) fn evaluate_interval(&self, i: usize, x: f64) -> f64 {
        let law = self.laws[self.region_of_interval(i)];
        law.interpolate(x, self.x[i], self.x[i + 1], self.y[i], self.y[i + 1])
    }

    /// One-sided limits `(from below, from above)` at `x` of the table
    /// extended by zero outside its domain.
    ///
    /// Both limits coincide except at a tabulated discontinuity and at the
    /// two domain limits, where the outer side is zero.
    pub(crate) fn limits(&self, x: f64) -> (f64, f64) {
        let (lower, upper) = self.domain();
        if !(lower <= x && x <= upper) {
            return (0.0, 0.0);
        }

        let first = self.x.partition_point(|&xi| xi < x);
        let past = self.x.partition_point(|&xi| xi <= x);

        let (below, above) = if first < past {
            (self.y[first], self.y[past - 1])
        } else {
            let value = self.evaluate_interval(past - 1, x);
            (value, value)
        };

        let below = if x == lower { 0.0 } else { below };
        let above = if x == upper { 0.0 } else { above };
        (below, above)
    }
}
