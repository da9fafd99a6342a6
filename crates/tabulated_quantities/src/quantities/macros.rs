//! Wrapper generator shared by all tabulated quantities.

use tabulated_core::table::InterpolationTable;

use crate::QuantityError;

/// Accept any table.
pub(crate) fn any_values(_: &InterpolationTable) -> Result<(), QuantityError> {
    Ok(())
}

/// Reject tables holding a negative dependent value.
pub(crate) fn non_negative_values(table: &InterpolationTable) -> Result<(), QuantityError> {
    match table.y().iter().position(|&y| y < 0.0) {
        Some(index) => Err(QuantityError::NegativeValue {
            index,
            value: table.y()[index],
        }),
        None => Ok(()),
    }
}

/// Define a quantity type owning an [`InterpolationTable`].
///
/// The generated type exposes the table contract under semantic accessor
/// names and runs `check` on every table it is built from, including the
/// results of its own arithmetic.
macro_rules! tabulated_quantity {
    (
        $(#[$meta:meta])*
        $name:ident {
            x: $x:ident,
            y: $y:ident,
            check: $check:path $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(
            feature = "serde",
            serde(
                try_from = "tabulated_core::table::InterpolationTable",
                into = "tabulated_core::table::InterpolationTable"
            )
        )]
        pub struct $name {
            table: tabulated_core::table::InterpolationTable,
        }

        impl $name {
            /// Construct from grids and region description.
            ///
            /// See [`InterpolationTable::new`](tabulated_core::table::InterpolationTable::new).
            pub fn new(
                x: Vec<f64>,
                y: Vec<f64>,
                boundaries: Vec<usize>,
                laws: Vec<tabulated_core::math::interpolators::InterpolationLaw>,
            ) -> Result<Self, $crate::QuantityError> {
                Self::from_table(tabulated_core::table::InterpolationTable::new(
                    x, y, boundaries, laws,
                )?)
            }

            /// Construct with a single interpolation region.
            pub fn with_law(
                x: Vec<f64>,
                y: Vec<f64>,
                law: tabulated_core::math::interpolators::InterpolationLaw,
            ) -> Result<Self, $crate::QuantityError> {
                Self::from_table(tabulated_core::table::InterpolationTable::with_law(x, y, law)?)
            }

            /// Take ownership of an existing table.
            pub fn from_table(
                table: tabulated_core::table::InterpolationTable,
            ) -> Result<Self, $crate::QuantityError> {
                $check(&table)?;
                Ok(Self { table })
            }

            /// Underlying table.
            #[inline]
            pub fn table(&self) -> &tabulated_core::table::InterpolationTable {
                &self.table
            }

            /// Give up the wrapper and return the table.
            #[inline]
            pub fn into_table(self) -> tabulated_core::table::InterpolationTable {
                self.table
            }

            /// Independent-variable grid.
            #[inline]
            pub fn $x(&self) -> &[f64] {
                self.table.x()
            }

            /// Tabulated values.
            #[inline]
            pub fn $y(&self) -> &[f64] {
                self.table.y()
            }

            /// Lowest tabulated abscissa.
            #[inline]
            pub fn lower_limit(&self) -> f64 {
                self.table.lower_limit()
            }

            /// Highest tabulated abscissa.
            #[inline]
            pub fn upper_limit(&self) -> f64 {
                self.table.upper_limit()
            }

            /// Number of tabulated points.
            #[inline]
            pub fn number_points(&self) -> usize {
                self.table.number_points()
            }

            /// Number of interpolation regions.
            #[inline]
            pub fn number_regions(&self) -> usize {
                self.table.number_regions()
            }

            /// Last point index of every region.
            #[inline]
            pub fn boundaries(&self) -> &[usize] {
                self.table.boundaries()
            }

            /// Interpolation law of every region.
            #[inline]
            pub fn laws(&self) -> &[tabulated_core::math::interpolators::InterpolationLaw] {
                self.table.laws()
            }

            /// True when every region is linear-linear.
            #[inline]
            pub fn is_linearised(&self) -> bool {
                self.table.is_linearised()
            }

            /// Value at `x`, zero outside the tabulated domain.
            #[inline]
            pub fn evaluate(&self, x: f64) -> f64 {
                self.table.evaluate(x)
            }

            /// Linearise with the default configuration.
            pub fn linearise(&self) -> Result<Self, $crate::QuantityError> {
                Self::from_table(self.table.linearise()?)
            }

            /// Linearise with an explicit configuration.
            pub fn linearise_with(
                &self,
                config: &tabulated_core::math::linearisation::LinearisationConfig,
            ) -> Result<Self, $crate::QuantityError> {
                Self::from_table(self.table.linearise_with(config)?)
            }

            /// Add a constant to every value.
            pub fn add_scalar(&self, value: f64) -> Result<Self, $crate::QuantityError> {
                Self::from_table(self.table.add_scalar(value)?)
            }

            /// Subtract a constant from every value.
            pub fn sub_scalar(&self, value: f64) -> Result<Self, $crate::QuantityError> {
                Self::from_table(self.table.sub_scalar(value)?)
            }

            /// Multiply every value by a constant.
            pub fn mul_scalar(&self, value: f64) -> Result<Self, $crate::QuantityError> {
                Self::from_table(self.table.mul_scalar(value)?)
            }

            /// Divide every value by a constant.
            pub fn div_scalar(&self, value: f64) -> Result<Self, $crate::QuantityError> {
                Self::from_table(self.table.div_scalar(value)?)
            }

            /// Change the sign of every value.
            pub fn negate(&self) -> Result<Self, $crate::QuantityError> {
                Self::from_table(-&self.table)
            }

            /// Pointwise sum, zero-padding each operand outside its domain.
            pub fn try_add(&self, other: &Self) -> Result<Self, $crate::QuantityError> {
                Self::from_table(self.table.add_table(&other.table)?)
            }

            /// Pointwise difference, zero-padding each operand outside its domain.
            pub fn try_sub(&self, other: &Self) -> Result<Self, $crate::QuantityError> {
                Self::from_table(self.table.sub_table(&other.table)?)
            }

            /// In-place [`add_scalar`](Self::add_scalar). Unchanged on error.
            pub fn add_scalar_assign(&mut self, value: f64) -> Result<(), $crate::QuantityError> {
                *self = self.add_scalar(value)?;
                Ok(())
            }

            /// In-place [`sub_scalar`](Self::sub_scalar). Unchanged on error.
            pub fn sub_scalar_assign(&mut self, value: f64) -> Result<(), $crate::QuantityError> {
                *self = self.sub_scalar(value)?;
                Ok(())
            }

            /// In-place [`mul_scalar`](Self::mul_scalar). Unchanged on error.
            pub fn mul_scalar_assign(&mut self, value: f64) -> Result<(), $crate::QuantityError> {
                *self = self.mul_scalar(value)?;
                Ok(())
            }

            /// In-place [`div_scalar`](Self::div_scalar). Unchanged on error.
            pub fn div_scalar_assign(&mut self, value: f64) -> Result<(), $crate::QuantityError> {
                *self = self.div_scalar(value)?;
                Ok(())
            }

            /// In-place [`try_add`](Self::try_add). Unchanged on error.
            pub fn try_add_assign(&mut self, other: &Self) -> Result<(), $crate::QuantityError> {
                *self = self.try_add(other)?;
                Ok(())
            }

            /// In-place [`try_sub`](Self::try_sub). Unchanged on error.
            pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), $crate::QuantityError> {
                *self = self.try_sub(other)?;
                Ok(())
            }
        }

        impl TryFrom<tabulated_core::table::InterpolationTable> for $name {
            type Error = $crate::QuantityError;

            fn try_from(
                table: tabulated_core::table::InterpolationTable,
            ) -> Result<Self, Self::Error> {
                Self::from_table(table)
            }
        }

        impl From<$name> for tabulated_core::table::InterpolationTable {
            fn from(quantity: $name) -> Self {
                quantity.table
            }
        }

        impl AsRef<tabulated_core::table::InterpolationTable> for $name {
            fn as_ref(&self) -> &tabulated_core::table::InterpolationTable {
                &self.table
            }
        }
    };
}

pub(crate) use tabulated_quantity;

#[cfg(test)]
mod tests {
    use super::*;
    use tabulated_core::math::interpolators::InterpolationLaw;

    #[test]
    fn test_non_negative_values() {
        let table = InterpolationTable::with_law(
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.0, -2.0],
            InterpolationLaw::LinearLinear,
        )
        .unwrap();

        assert_eq!(
            non_negative_values(&table),
            Err(QuantityError::NegativeValue {
                index: 2,
                value: -2.0
            })
        );
        assert!(any_values(&table).is_ok());
    }
}
