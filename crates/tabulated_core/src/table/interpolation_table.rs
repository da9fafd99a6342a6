//! Table construction, validation and read accessors.

use crate::math::interpolators::InterpolationLaw;
use crate::types::TableError;

/// Piecewise-interpolated function of one variable.
///
/// Holds an ordered independent grid `x`, the matching dependent values
/// `y`, and a partition of the grid into interpolation regions. Region `k`
/// covers the points `boundaries[k - 1] ..= boundaries[k]` (region 0 starts
/// at index 0), so adjacent regions share their boundary point.
///
/// A discontinuity is encoded by two consecutive equal abscissae. The
/// first point of the pair must be a region boundary: it closes the region
/// on the left and the zero-width step to the second point opens the next
/// region.
///
/// Tables are plain values. Every operation returns a new table and never
/// touches its operands.
///
/// # Example
///
/// ```
/// use tabulated_core::math::interpolators::InterpolationLaw;
/// use tabulated_core::table::InterpolationTable;
///
/// // Jump from 3 to 4 at x = 2
/// let table = InterpolationTable::new(
///     vec![1.0, 2.0, 2.0, 3.0, 4.0],
///     vec![4.0, 3.0, 4.0, 3.0, 2.0],
///     vec![1, 4],
///     vec![InterpolationLaw::LinearLinear; 2],
/// )
/// .unwrap();
///
/// assert_eq!(table.number_points(), 5);
/// assert_eq!(table.number_regions(), 2);
/// assert!(table.is_linearised());
/// assert_eq!(table.evaluate(2.0), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "TableParts", into = "TableParts")
)]
pub struct InterpolationTable {
    /// Independent grid, non-decreasing
    pub(crate) x: Vec<f64>,
    /// Dependent values aligned with `x`
    pub(crate) y: Vec<f64>,
    /// Last point index of every region
    pub(crate) boundaries: Vec<usize>,
    /// Interpolation law of every region
    pub(crate) laws: Vec<InterpolationLaw>,
    /// True when every region is linear-linear
    pub(crate) linearised: bool,
}

impl InterpolationTable {
    /// Construct a table from its grids and region description.
    ///
    /// # Arguments
    ///
    /// * `x` - Independent grid (non-decreasing, duplicates only at region boundaries)
    /// * `y` - Dependent values, same length as `x`
    /// * `boundaries` - Last point index of each region; the final entry is `x.len() - 1`
    /// * `laws` - Interpolation law of each region
    ///
    /// # Errors
    ///
    /// * `TableError::LengthMismatch` - `x` and `y` differ in length
    /// * `TableError::InsufficientData` - Fewer than 2 points
    /// * `TableError::RegionMismatch` - `boundaries` and `laws` differ in length or are empty
    /// * `TableError::UnsortedGrid` - `x` decreases somewhere
    /// * `TableError::InvalidBoundaries` - Boundaries do not partition the grid
    /// * `TableError::MisplacedJump` - Duplicate abscissae inside a region
    /// * `TableError::LogarithmicDomain` - Logarithmic law over invalid values
    ///
    /// # Example
    ///
    /// ```
    /// use tabulated_core::math::interpolators::InterpolationLaw;
    /// use tabulated_core::table::InterpolationTable;
    ///
    /// let result = InterpolationTable::new(
    ///     vec![1.0, 3.0, 2.0],
    ///     vec![1.0, 2.0, 3.0],
    ///     vec![2],
    ///     vec![InterpolationLaw::LinearLinear],
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        boundaries: Vec<usize>,
        laws: Vec<InterpolationLaw>,
    ) -> Result<Self, TableError> {
        validate(&x, &y, &boundaries, &laws)?;

        let linearised = laws
            .iter()
            .all(|law| *law == InterpolationLaw::LinearLinear);

        Ok(Self {
            x,
            y,
            boundaries,
            laws,
            linearised,
        })
    }

    /// Construct a table with a single region spanning the whole grid.
    ///
    /// # Example
    ///
    /// ```
    /// use tabulated_core::math::interpolators::InterpolationLaw;
    /// use tabulated_core::table::InterpolationTable;
    ///
    /// let table = InterpolationTable::with_law(
    ///     vec![1.0, 2.0, 3.0],
    ///     vec![1.0, 4.0, 9.0],
    ///     InterpolationLaw::LogLog,
    /// )
    /// .unwrap();
    /// assert_eq!(table.boundaries(), &[2]);
    /// assert!(!table.is_linearised());
    /// ```
    pub fn with_law(x: Vec<f64>, y: Vec<f64>, law: InterpolationLaw) -> Result<Self, TableError> {
        let last = x.len().saturating_sub(1);
        Self::new(x, y, vec![last], vec![law])
    }

    /// Independent-variable grid.
    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Dependent-variable values.
    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Lowest tabulated abscissa.
    #[inline]
    pub fn lower_limit(&self) -> f64 {
        self.x[0]
    }

    /// Highest tabulated abscissa.
    #[inline]
    pub fn upper_limit(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// `(lower_limit, upper_limit)`.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.lower_limit(), self.upper_limit())
    }

    /// Number of tabulated points, duplicates included.
    #[inline]
    pub fn number_points(&self) -> usize {
        self.x.len()
    }

    /// Number of interpolation regions.
    #[inline]
    pub fn number_regions(&self) -> usize {
        self.boundaries.len()
    }

    /// Last point index of every region.
    #[inline]
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Interpolation law of every region.
    #[inline]
    pub fn laws(&self) -> &[InterpolationLaw] {
        &self.laws
    }

    /// True when every region uses [`InterpolationLaw::LinearLinear`].
    #[inline]
    pub fn is_linearised(&self) -> bool {
        self.linearised
    }

    /// Law governing the interval between points `i` and `i + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `i + 1 >= number_points()`.
    #[inline]
    pub fn law_for_interval(&self, i: usize) -> InterpolationLaw {
        assert!(i + 1 < self.x.len(), "interval index out of range");
        self.laws[self.region_of_interval(i)]
    }

    /// Region containing the interval `[x[i], x[i + 1]]`.
    #[inline]
    pub(crate) fn region_of_interval(&self, i: usize) -> usize {
        self.boundaries.partition_point(|&b| b <= i)
    }

    /// True if two consecutive points sit at `x`.
    pub(crate) fn has_jump_at(&self, x: f64) -> bool {
        let first = self.x.partition_point(|&xi| xi < x);
        first + 1 < self.x.len() && self.x[first] == x && self.x[first + 1] == x
    }

    /// Abscissae where the regions other than the last one end.
    pub(crate) fn interior_breaks(&self) -> impl Iterator<Item = f64> + '_ {
        self.boundaries[..self.boundaries.len() - 1]
            .iter()
            .map(move |&b| self.x[b])
    }
}

/// Region boundary indices for a grid built by an operation.
///
/// Every duplicate pair and every abscissa in `breaks` closes a region at
/// the first point sitting there; the last index always closes the final
/// region.
pub(crate) fn boundaries_for(x: &[f64], breaks: &[f64]) -> Vec<usize> {
    let last = x.len() - 1;
    let mut boundaries: Vec<usize> = x
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] == pair[1])
        .map(|(i, _)| i)
        .collect();

    boundaries.extend(
        breaks
            .iter()
            .map(|&b| x.partition_point(|&xi| xi < b))
            .filter(|&i| i < last && x[i] > x[0]),
    );
    boundaries.push(last);

    boundaries.sort_unstable();
    boundaries.dedup();
    boundaries
}

fn validate(
    x: &[f64],
    y: &[f64],
    boundaries: &[usize],
    laws: &[InterpolationLaw],
) -> Result<(), TableError> {
    if x.len() != y.len() {
        return Err(TableError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    if x.len() < 2 {
        return Err(TableError::InsufficientData {
            got: x.len(),
            need: 2,
        });
    }

    if boundaries.is_empty() || boundaries.len() != laws.len() {
        return Err(TableError::RegionMismatch {
            boundaries: boundaries.len(),
            laws: laws.len(),
        });
    }

    // `!(a <= b)` also rejects NaN
    if let Some(index) = x.windows(2).position(|pair| !(pair[0] <= pair[1])) {
        return Err(TableError::UnsortedGrid { index });
    }

    let last = x.len() - 1;
    if boundaries[boundaries.len() - 1] != last {
        return Err(TableError::InvalidBoundaries(format!(
            "last boundary {} does not match last point index {}",
            boundaries[boundaries.len() - 1],
            last
        )));
    }

    let mut start = 0;
    for &end in boundaries {
        if end <= start {
            return Err(TableError::InvalidBoundaries(format!(
                "boundary {} does not follow {}",
                end, start
            )));
        }
        if x[end] <= x[start] {
            return Err(TableError::InvalidBoundaries(format!(
                "region {}..={} has zero width",
                start, end
            )));
        }
        start = end;
    }

    let interior = &boundaries[..boundaries.len() - 1];
    for i in 0..last {
        if x[i] != x[i + 1] {
            continue;
        }
        let triple = i + 2 <= last && x[i + 2] == x[i];
        if triple || interior.binary_search(&i).is_err() {
            return Err(TableError::MisplacedJump { index: i });
        }
    }

    let mut start = 0;
    for (&end, &law) in boundaries.iter().zip(laws) {
        if law.is_log_x() {
            if let Some(offset) = x[start..=end].iter().position(|&xi| xi <= 0.0) {
                return Err(TableError::LogarithmicDomain {
                    index: start + offset,
                    law,
                });
            }
        }
        if law.is_log_y() {
            for i in start..end {
                if x[i] != x[i + 1] && !(y[i] * y[i + 1] > 0.0) {
                    return Err(TableError::LogarithmicDomain { index: i, law });
                }
            }
        }
        start = end;
    }

    Ok(())
}

/// Unvalidated mirror used for (de)serialisation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct TableParts {
    x: Vec<f64>,
    y: Vec<f64>,
    boundaries: Vec<usize>,
    laws: Vec<InterpolationLaw>,
}

#[cfg(feature = "serde")]
impl TryFrom<TableParts> for InterpolationTable {
    type Error = TableError;

    fn try_from(parts: TableParts) -> Result<Self, Self::Error> {
        Self::new(parts.x, parts.y, parts.boundaries, parts.laws)
    }
}

#[cfg(feature = "serde")]
impl From<InterpolationTable> for TableParts {
    fn from(table: InterpolationTable) -> Self {
        Self {
            x: table.x,
            y: table.y,
            boundaries: table.boundaries,
            laws: table.laws,
        }
    }
}
