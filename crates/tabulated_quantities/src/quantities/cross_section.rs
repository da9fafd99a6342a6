//! Energy-dependent cross sections.

use super::macros::{any_values, tabulated_quantity};

tabulated_quantity! {
    /// Cross section as a function of incident energy.
    ///
    /// Values may be negative: partial cross sections obtained by
    /// subtracting a total from a sum of partials often carry small
    /// negative residues.
    ///
    /// # Example
    ///
    /// ```
    /// use tabulated_core::math::interpolators::InterpolationLaw;
    /// use tabulated_quantities::quantities::CrossSection;
    ///
    /// let xs = CrossSection::with_law(
    ///     vec![1.0, 100.0],
    ///     vec![10.0, 1.0],
    ///     InterpolationLaw::LogLog,
    /// )
    /// .unwrap();
    ///
    /// assert!((xs.evaluate(10.0) - 10f64.sqrt()).abs() < 1e-12);
    /// assert_eq!(xs.evaluate(1000.0), 0.0);
    /// ```
    CrossSection {
        x: energies,
        y: values,
        check: any_values,
    }
}
