//! Arithmetic with scalars and between tables.
//!
//! Scalar operations act on the dependent values only and keep the grid
//! and the regions. Additive offsets require every region to be
//! linear-linear. Scaling is rejected on tables mixing several
//! interpolation laws.
//!
//! Sums and differences of two tables require both operands to be
//! linearised. The result lives on the union of the two domains, each
//! operand contributing zero outside its own domain. Products and
//! quotients of two tables are not defined.

use std::ops::Neg;

use tracing::trace;

use super::interpolation_table::boundaries_for;
use super::InterpolationTable;
use crate::math::interpolators::InterpolationLaw;
use crate::types::TableError;

impl InterpolationTable {
    /// Add `value` to every dependent value.
    ///
    /// # Errors
    ///
    /// `TableError::UnsupportedOperation` unless every region is
    /// linear-linear.
    ///
    /// # Example
    ///
    /// ```
    /// use tabulated_core::math::interpolators::InterpolationLaw;
    /// use tabulated_core::table::InterpolationTable;
    ///
    /// let table = InterpolationTable::with_law(
    ///     vec![1.0, 2.0],
    ///     vec![3.0, 5.0],
    ///     InterpolationLaw::LinearLinear,
    /// )
    /// .unwrap();
    ///
    /// let shifted = table.add_scalar(2.0).unwrap();
    /// assert_eq!(shifted.y(), &[5.0, 7.0]);
    /// ```
    pub fn add_scalar(&self, value: f64) -> Result<Self, TableError> {
        self.check_offset("+")?;
        Ok(self.map_values(|y| y + value))
    }

    /// Subtract `value` from every dependent value.
    ///
    /// # Errors
    ///
    /// Same as [`add_scalar`](Self::add_scalar).
    pub fn sub_scalar(&self, value: f64) -> Result<Self, TableError> {
        self.check_offset("-")?;
        Ok(self.map_values(|y| y - value))
    }

    /// Multiply every dependent value by `value`.
    ///
    /// # Errors
    ///
    /// `TableError::UnsupportedOperation` if the table mixes interpolation
    /// laws, if `value` is not finite, or if `value` is zero under a law
    /// that is logarithmic in `y`.
    pub fn mul_scalar(&self, value: f64) -> Result<Self, TableError> {
        self.check_scale("*", value)?;
        Ok(self.map_values(|y| y * value))
    }

    /// Divide every dependent value by `value`.
    ///
    /// # Errors
    ///
    /// `TableError::UnsupportedOperation` if the table mixes interpolation
    /// laws or if `value` is zero or not finite.
    pub fn div_scalar(&self, value: f64) -> Result<Self, TableError> {
        if value == 0.0 {
            return Err(TableError::UnsupportedOperation(
                "division of a table by zero".to_string(),
            ));
        }
        self.check_scale("/", value)?;
        Ok(self.map_values(|y| y / value))
    }

    /// In-place [`add_scalar`](Self::add_scalar). The table is unchanged on error.
    pub fn add_scalar_assign(&mut self, value: f64) -> Result<(), TableError> {
        *self = self.add_scalar(value)?;
        Ok(())
    }

    /// In-place [`sub_scalar`](Self::sub_scalar). The table is unchanged on error.
    pub fn sub_scalar_assign(&mut self, value: f64) -> Result<(), TableError> {
        *self = self.sub_scalar(value)?;
        Ok(())
    }

    /// In-place [`mul_scalar`](Self::mul_scalar). The table is unchanged on error.
    pub fn mul_scalar_assign(&mut self, value: f64) -> Result<(), TableError> {
        *self = self.mul_scalar(value)?;
        Ok(())
    }

    /// In-place [`div_scalar`](Self::div_scalar). The table is unchanged on error.
    pub fn div_scalar_assign(&mut self, value: f64) -> Result<(), TableError> {
        *self = self.div_scalar(value)?;
        Ok(())
    }

    /// Pointwise sum of two linearised tables.
    ///
    /// The result covers the union of both domains. Each operand is zero
    /// outside its own domain, so a domain limit lying strictly inside the
    /// union becomes a discontinuity of the result and closes a region.
    ///
    /// # Errors
    ///
    /// `TableError::UnsupportedOperation` if either operand is not linearised.
    ///
    /// # Example
    ///
    /// ```
    /// use tabulated_core::math::interpolators::InterpolationLaw;
    /// use tabulated_core::table::InterpolationTable;
    ///
    /// let a = InterpolationTable::with_law(
    ///     vec![1.0, 2.0, 3.0, 4.0],
    ///     vec![4.0, 3.0, 2.0, 1.0],
    ///     InterpolationLaw::LinearLinear,
    /// )
    /// .unwrap();
    /// let b = InterpolationTable::with_law(
    ///     vec![2.0, 4.0],
    ///     vec![1.0, 3.0],
    ///     InterpolationLaw::LinearLinear,
    /// )
    /// .unwrap();
    ///
    /// let sum = a.add_table(&b).unwrap();
    /// assert_eq!(sum.x(), &[1.0, 2.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(sum.y(), &[4.0, 3.0, 4.0, 4.0, 4.0]);
    /// assert_eq!(sum.boundaries(), &[1, 4]);
    /// ```
    pub fn add_table(&self, other: &Self) -> Result<Self, TableError> {
        self.combine(other, "+", |a, b| a + b)
    }

    /// Pointwise difference of two linearised tables.
    ///
    /// # Errors
    ///
    /// Same as [`add_table`](Self::add_table).
    pub fn sub_table(&self, other: &Self) -> Result<Self, TableError> {
        self.combine(other, "-", |a, b| a - b)
    }

    /// In-place [`add_table`](Self::add_table). The table is unchanged on error.
    pub fn add_table_assign(&mut self, other: &Self) -> Result<(), TableError> {
        *self = self.add_table(other)?;
        Ok(())
    }

    /// In-place [`sub_table`](Self::sub_table). The table is unchanged on error.
    pub fn sub_table_assign(&mut self, other: &Self) -> Result<(), TableError> {
        *self = self.sub_table(other)?;
        Ok(())
    }

    /// Product of two tables. Always fails.
    ///
    /// # Errors
    ///
    /// Always `TableError::UnsupportedOperation`.
    pub fn mul_table(&self, _other: &Self) -> Result<Self, TableError> {
        Err(TableError::UnsupportedOperation(
            "multiplication of two tables".to_string(),
        ))
    }

    /// Quotient of two tables. Always fails.
    ///
    /// # Errors
    ///
    /// Always `TableError::UnsupportedOperation`.
    pub fn div_table(&self, _other: &Self) -> Result<Self, TableError> {
        Err(TableError::UnsupportedOperation(
            "division of two tables".to_string(),
        ))
    }

    fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            y: self.y.iter().map(|&y| f(y)).collect(),
            ..self.clone()
        }
    }

    /// The single law of the table, or an error naming the first two
    /// distinct laws.
    fn single_law(&self, op: &str) -> Result<InterpolationLaw, TableError> {
        let first = self.laws[0];
        match self.laws.iter().find(|&&law| law != first) {
            Some(other) => Err(TableError::UnsupportedOperation(format!(
                "scalar {} on a table mixing {} and {} interpolation",
                op, first, other
            ))),
            None => Ok(first),
        }
    }

    fn check_offset(&self, op: &str) -> Result<(), TableError> {
        match self.laws.iter().find(|&&law| law != InterpolationLaw::LinearLinear) {
            Some(law) => Err(TableError::UnsupportedOperation(format!(
                "scalar {} on a table with {} interpolation",
                op, law
            ))),
            None => Ok(()),
        }
    }

    fn check_scale(&self, op: &str, value: f64) -> Result<(), TableError> {
        let law = self.single_law(op)?;
        if !value.is_finite() {
            return Err(TableError::UnsupportedOperation(format!(
                "scalar {} by non-finite value {}",
                op, value
            )));
        }
        if value == 0.0 && law.is_log_y() {
            return Err(TableError::UnsupportedOperation(format!(
                "scalar {} by zero on a table with {} interpolation",
                op, law
            )));
        }
        Ok(())
    }

    fn combine(
        &self,
        other: &Self,
        op: &str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, TableError> {
        if !self.is_linearised() || !other.is_linearised() {
            return Err(TableError::UnsupportedOperation(format!(
                "table {} table requires linearised operands",
                op
            )));
        }

        let lower = self.lower_limit().min(other.lower_limit());
        let upper = self.upper_limit().max(other.upper_limit());

        let mut grid: Vec<f64> = self.x.iter().chain(&other.x).copied().collect();
        grid.sort_by(f64::total_cmp);
        grid.dedup();

        let mut x = Vec::with_capacity(grid.len() + 4);
        let mut y = Vec::with_capacity(grid.len() + 4);
        for value in grid {
            let (below_a, above_a) = self.limits(value);
            let (below_b, above_b) = other.limits(value);
            let below = f(below_a, below_b);
            let above = f(above_a, above_b);

            if value == lower {
                x.push(value);
                y.push(above);
            } else if value == upper {
                x.push(value);
                y.push(below);
            } else if self.is_discontinuous_at(value) || other.is_discontinuous_at(value) {
                x.extend([value, value]);
                y.extend([below, above]);
            } else {
                x.push(value);
                y.push(below);
            }
        }

        let breaks: Vec<f64> = self.interior_breaks().chain(other.interior_breaks()).collect();
        let boundaries = boundaries_for(&x, &breaks);
        let laws = vec![InterpolationLaw::LinearLinear; boundaries.len()];

        trace!(
            lhs_points = self.number_points(),
            rhs_points = other.number_points(),
            result_points = x.len(),
            "table {} table",
            op
        );

        Self::new(x, y, boundaries, laws)
    }

    /// Jump in the table or domain limit, for a point inside the union domain.
    fn is_discontinuous_at(&self, x: f64) -> bool {
        x == self.lower_limit() || x == self.upper_limit() || self.has_jump_at(x)
    }
}

impl Neg for InterpolationTable {
    type Output = InterpolationTable;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Neg for &InterpolationTable {
    type Output = InterpolationTable;

    fn neg(self) -> Self::Output {
        self.map_values(|y| -y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LINLIN: InterpolationLaw = InterpolationLaw::LinearLinear;

    fn descending() -> InterpolationTable {
        InterpolationTable::with_law(vec![1.0, 2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0, 1.0], LINLIN)
            .unwrap()
    }

    fn jump_table() -> InterpolationTable {
        InterpolationTable::new(
            vec![1.0, 2.0, 2.0, 3.0, 4.0],
            vec![4.0, 3.0, 4.0, 3.0, 2.0],
            vec![1, 4],
            vec![LINLIN, LINLIN],
        )
        .unwrap()
    }

    fn mixed_laws() -> InterpolationTable {
        InterpolationTable::new(
            vec![1.0, 2.0, 3.0, 4.0],
            vec![4.0, 3.0, 2.0, 1.0],
            vec![1, 3],
            vec![LINLIN, InterpolationLaw::LogLog],
        )
        .unwrap()
    }

    fn is_unsupported<T>(result: Result<T, TableError>) -> bool {
        matches!(result, Err(TableError::UnsupportedOperation(_)))
    }

    // ========================================
    // Scalar arithmetic
    // ========================================

    #[test]
    fn test_scalar_operations() {
        let table = descending();

        assert_eq!(table.add_scalar(2.0).unwrap().y(), &[6.0, 5.0, 4.0, 3.0]);
        assert_eq!(table.sub_scalar(2.0).unwrap().y(), &[2.0, 1.0, 0.0, -1.0]);
        assert_eq!(table.mul_scalar(2.0).unwrap().y(), &[8.0, 6.0, 4.0, 2.0]);
        assert_eq!(table.div_scalar(2.0).unwrap().y(), &[2.0, 1.5, 1.0, 0.5]);
        assert_eq!((-&table).y(), &[-4.0, -3.0, -2.0, -1.0]);
    }

    #[test]
    fn test_scalar_operations_keep_grid_and_regions() {
        let table = jump_table();
        let result = table.mul_scalar(3.0).unwrap();

        assert_eq!(result.x(), table.x());
        assert_eq!(result.boundaries(), table.boundaries());
        assert_eq!(result.laws(), table.laws());
        assert_eq!(result.y(), &[12.0, 9.0, 12.0, 9.0, 6.0]);
        assert_eq!(result.evaluate(2.0), 12.0);
    }

    #[test]
    fn test_scalar_operations_do_not_touch_operand() {
        let table = descending();
        let _ = table.add_scalar(10.0).unwrap();
        assert_eq!(table.y(), &[4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_scalar_assign_operations() {
        let mut table = jump_table();
        table.add_scalar_assign(1.0).unwrap();
        assert_eq!(table.y(), &[5.0, 4.0, 5.0, 4.0, 3.0]);
        table.sub_scalar_assign(2.0).unwrap();
        assert_eq!(table.y(), &[3.0, 2.0, 3.0, 2.0, 1.0]);
        table.mul_scalar_assign(2.0).unwrap();
        assert_eq!(table.y(), &[6.0, 4.0, 6.0, 4.0, 2.0]);
        table.div_scalar_assign(4.0).unwrap();
        assert_eq!(table.y(), &[1.5, 1.0, 1.5, 1.0, 0.5]);
        assert_eq!(table.x(), &[1.0, 2.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_negation_owned() {
        let table = -jump_table();
        assert_eq!(table.y(), &[-4.0, -3.0, -4.0, -3.0, -2.0]);
        assert_eq!(table.evaluate(2.0), -4.0);
    }

    #[test]
    fn test_scalar_on_mixed_laws_is_unsupported() {
        let table = mixed_laws();
        assert!(is_unsupported(table.add_scalar(2.0)));
        assert!(is_unsupported(table.sub_scalar(2.0)));
        assert!(is_unsupported(table.mul_scalar(2.0)));
        assert!(is_unsupported(table.div_scalar(2.0)));
    }

    #[test]
    fn test_scalar_assign_on_error_keeps_table() {
        let mut table = mixed_laws();
        let before = table.clone();
        assert!(table.add_scalar_assign(2.0).is_err());
        assert_eq!(table, before);
    }

    #[test]
    fn test_offset_on_log_y_law_is_unsupported() {
        let table =
            InterpolationTable::with_law(vec![1.0, 2.0], vec![1.0, 4.0], InterpolationLaw::LogLog)
                .unwrap();
        assert!(is_unsupported(table.add_scalar(1.0)));
        assert!(is_unsupported(table.sub_scalar(1.0)));

        let scaled = table.mul_scalar(2.0).unwrap();
        assert_eq!(scaled.y(), &[2.0, 8.0]);
        assert_relative_eq!(scaled.evaluate(1.5), 2.0 * table.evaluate(1.5), epsilon = 1e-12);
    }

    #[test]
    fn test_offset_requires_linear_linear() {
        for law in [InterpolationLaw::LogLinear, InterpolationLaw::Histogram] {
            let table = InterpolationTable::with_law(vec![1.0, 100.0], vec![1.0, 2.0], law)
                .unwrap();
            assert!(is_unsupported(table.add_scalar(1.0)));
            assert!(is_unsupported(table.sub_scalar(1.0)));
            assert!(table.mul_scalar(2.0).is_ok());
        }

        let linear = InterpolationTable::with_law(
            vec![1.0, 100.0],
            vec![1.0, 2.0],
            InterpolationLaw::LogLinear,
        )
        .unwrap()
        .linearise()
        .unwrap();
        assert!(linear.add_scalar(1.0).is_ok());
    }

    #[test]
    fn test_scale_rejections() {
        let table = descending();
        assert!(is_unsupported(table.div_scalar(0.0)));
        assert!(is_unsupported(table.mul_scalar(f64::NAN)));
        assert!(is_unsupported(table.mul_scalar(f64::INFINITY)));
        assert_eq!(table.mul_scalar(0.0).unwrap().y(), &[0.0; 4]);

        let log = InterpolationTable::with_law(
            vec![1.0, 2.0],
            vec![1.0, 4.0],
            InterpolationLaw::LinearLog,
        )
        .unwrap();
        assert!(is_unsupported(log.mul_scalar(0.0)));
    }

    // ========================================
    // Table arithmetic
    // ========================================

    #[test]
    fn test_add_tables_narrower_domain() {
        let a = descending();
        let b = InterpolationTable::with_law(vec![2.0, 4.0], vec![1.0, 3.0], LINLIN).unwrap();

        let sum = a.add_table(&b).unwrap();
        assert_eq!(sum.number_points(), 5);
        assert_eq!(sum.number_regions(), 2);
        assert_eq!(sum.x(), &[1.0, 2.0, 2.0, 3.0, 4.0]);
        assert_eq!(sum.y(), &[4.0, 3.0, 4.0, 4.0, 4.0]);
        assert_eq!(sum.boundaries(), &[1, 4]);
        assert_eq!(sum.laws(), &[LINLIN, LINLIN]);

        // Operands untouched
        assert_eq!(a.number_points(), 4);
        assert_eq!(b.number_points(), 2);
    }

    #[test]
    fn test_add_tables_equal_sides_keep_duplicate() {
        // b starts at zero, so both sides of x = 2 agree
        let a = descending();
        let b = InterpolationTable::with_law(vec![2.0, 4.0], vec![0.0, 2.0], LINLIN).unwrap();

        let sum = a.add_table(&b).unwrap();
        assert_eq!(sum.x(), &[1.0, 2.0, 2.0, 3.0, 4.0]);
        assert_eq!(sum.y(), &[4.0, 3.0, 3.0, 3.0, 3.0]);
        assert_eq!(sum.boundaries(), &[1, 4]);
        assert_eq!(sum.number_regions(), 2);
        assert_relative_eq!(sum.evaluate(1.5), 3.5);
        assert_eq!(sum.evaluate(2.0), 3.0);
        assert_relative_eq!(sum.evaluate(3.5), 3.0);
    }

    #[test]
    fn test_add_tables_same_grid() {
        let a = descending();
        let sum = a.add_table(&a).unwrap();
        assert_eq!(sum.x(), a.x());
        assert_eq!(sum.y(), &[8.0, 6.0, 4.0, 2.0]);
        assert_eq!(sum.boundaries(), &[3]);
    }

    #[test]
    fn test_sub_tables_interleaved_grids() {
        let a = InterpolationTable::with_law(vec![0.0, 2.0, 4.0], vec![0.0, 2.0, 4.0], LINLIN)
            .unwrap();
        let b = InterpolationTable::with_law(
            vec![0.0, 1.0, 3.0, 4.0],
            vec![1.0, 1.0, 1.0, 1.0],
            LINLIN,
        )
        .unwrap();

        let difference = a.sub_table(&b).unwrap();
        assert_eq!(difference.x(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(difference.y(), &[-1.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(difference.number_regions(), 1);
    }

    #[test]
    fn test_add_tables_disjoint_domains() {
        let a = InterpolationTable::with_law(vec![1.0, 2.0], vec![1.0, 1.0], LINLIN).unwrap();
        let b = InterpolationTable::with_law(vec![3.0, 4.0], vec![2.0, 2.0], LINLIN).unwrap();

        let sum = a.add_table(&b).unwrap();
        assert_eq!(sum.x(), &[1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
        assert_eq!(sum.y(), &[1.0, 1.0, 0.0, 0.0, 2.0, 2.0]);
        assert_eq!(sum.boundaries(), &[1, 3, 5]);
        assert_eq!(sum.evaluate(2.5), 0.0);
    }

    #[test]
    fn test_add_tables_adjacent_domains() {
        let a = InterpolationTable::with_law(vec![1.0, 2.0], vec![1.0, 1.0], LINLIN).unwrap();
        let b = InterpolationTable::with_law(vec![2.0, 3.0], vec![5.0, 5.0], LINLIN).unwrap();

        let sum = a.add_table(&b).unwrap();
        assert_eq!(sum.x(), &[1.0, 2.0, 2.0, 3.0]);
        assert_eq!(sum.y(), &[1.0, 1.0, 5.0, 5.0]);
        assert_eq!(sum.boundaries(), &[1, 3]);
    }

    #[test]
    fn test_add_tables_keeps_operand_jump() {
        let a = jump_table();
        let b = InterpolationTable::with_law(vec![1.0, 4.0], vec![1.0, 1.0], LINLIN).unwrap();

        let sum = a.add_table(&b).unwrap();
        assert_eq!(sum.x(), &[1.0, 2.0, 2.0, 3.0, 4.0]);
        assert_eq!(sum.y(), &[5.0, 4.0, 5.0, 4.0, 3.0]);
        assert_eq!(sum.boundaries(), &[1, 4]);
    }

    #[test]
    fn test_add_tables_keeps_region_boundaries() {
        let a = InterpolationTable::new(
            vec![1.0, 2.0, 3.0, 4.0],
            vec![4.0, 3.0, 2.0, 1.0],
            vec![2, 3],
            vec![LINLIN, LINLIN],
        )
        .unwrap();
        let b = InterpolationTable::with_law(vec![1.0, 2.5, 4.0], vec![0.0, 0.0, 0.0], LINLIN)
            .unwrap();

        let sum = a.add_table(&b).unwrap();
        assert_eq!(sum.x(), &[1.0, 2.0, 2.5, 3.0, 4.0]);
        assert_eq!(sum.boundaries(), &[3, 4]);
    }

    #[test]
    fn test_add_sub_round_trip() {
        let a = descending();
        let b = InterpolationTable::with_law(vec![2.0, 4.0], vec![1.0, 3.0], LINLIN).unwrap();

        let back = a.add_table(&b).unwrap().sub_table(&b).unwrap();
        for x in [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0] {
            assert_relative_eq!(back.evaluate(x), a.evaluate(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_table_assign_operations() {
        let mut a = descending();
        let b = InterpolationTable::with_law(vec![2.0, 4.0], vec![1.0, 3.0], LINLIN).unwrap();

        a.add_table_assign(&b).unwrap();
        assert_eq!(a.y(), &[4.0, 3.0, 4.0, 4.0, 4.0]);

        a.sub_table_assign(&b).unwrap();
        assert_eq!(a.y(), &[4.0, 3.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_table_arithmetic_requires_linearised_operands() {
        let a = descending();
        let b = mixed_laws();
        assert!(is_unsupported(a.add_table(&b)));
        assert!(is_unsupported(b.sub_table(&a)));
    }

    #[test]
    fn test_table_product_and_quotient_are_unsupported() {
        let a = descending();
        assert!(is_unsupported(a.mul_table(&a)));
        assert!(is_unsupported(a.div_table(&a)));
    }
}
