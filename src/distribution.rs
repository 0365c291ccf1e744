use num_traits::NumCast;

use crate::error::DistributionError;
use crate::group::Group;
use crate::range::{IndexStorage, Range};

/// Ranges for populations too small to split five ways, indexed by count.
///
/// Each row holds `(first, last)` for Top, High, Median, Low and Bottom in that
/// order; `None` leaves the group without members.
const SMALL_POPULATIONS: [[Option<(u16, u16)>; 5]; 5] = [
    [None, None, Some((0, 0)), None, None],
    [None, None, Some((0, 0)), None, None],
    [None, Some((0, 0)), None, Some((1, 1)), None],
    [None, Some((0, 0)), Some((1, 1)), Some((2, 2)), None],
    [Some((0, 0)), Some((1, 1)), None, Some((2, 2)), Some((3, 3))],
];

/// Members High, Median and Low gain over the baseline quintile width,
/// indexed by `population_count % 5`.
const INNER_GROWTH: [[u16; 3]; 5] = [[0, 0, 0], [0, 1, 0], [1, 0, 1], [1, 1, 1], [2, 0, 2]];

/// How a [`Distribution`] lays out its five ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Five equal blocks; the count is a non-zero multiple of five.
    Ideal,
    /// Fixed table for fewer than five members.
    Small,
    /// Baseline blocks with the remainder spread over High, Median and Low.
    Unbalanced,
}

impl Strategy {
    /// Selects the layout for a population of `population_count` members.
    ///
    /// Counts below five always use the fixed table, so an empty population
    /// keeps its single `Median` sentinel at index 0.
    pub fn select<T: IndexStorage>(population_count: T) -> Self {
        let five = T::from_count(5);
        if population_count < five {
            Strategy::Small
        } else if population_count % five == T::zero() {
            Strategy::Ideal
        } else {
            Strategy::Unbalanced
        }
    }

    fn lay_out<T: IndexStorage>(self, population_count: T) -> [Range<T>; 5] {
        match self {
            Strategy::Ideal => ideal(population_count),
            Strategy::Small => small(population_count),
            Strategy::Unbalanced => unbalanced(population_count),
        }
    }
}

fn ideal<T: IndexStorage>(population_count: T) -> [Range<T>; 5] {
    let one = T::one();
    let size = population_count / T::from_count(5);
    let index = size - one;
    let double = size + size;
    let triple = double + size;

    [
        Range::new(T::zero(), index),
        Range::new(index + one, index + size),
        Range::new(index + size + one, index + double),
        Range::new(index + double + one, index + triple),
        Range::new(index + triple + one, population_count - one),
    ]
}

fn small<T: IndexStorage>(population_count: T) -> [Range<T>; 5] {
    let row = population_count
        .to_usize()
        .and_then(|count| SMALL_POPULATIONS.get(count))
        .copied();

    // Five or more members never select this layout.
    row.map_or([Range::empty(); 5], |row| {
        row.map(|bounds| {
            bounds.map_or_else(Range::empty, |(first, last)| {
                Range::new(T::from_count(first), T::from_count(last))
            })
        })
    })
}

fn unbalanced<T: IndexStorage>(population_count: T) -> [Range<T>; 5] {
    let one = T::one();
    let five = T::from_count(5);
    let size = population_count / five;
    let growth = (population_count % five)
        .to_usize()
        .and_then(|extra| INNER_GROWTH.get(extra))
        .copied()
        .unwrap_or_default();

    let widths = [
        size,
        size + T::from_count(growth[0]),
        size + T::from_count(growth[1]),
        size + T::from_count(growth[2]),
    ];

    let mut ranges = [Range::empty(); 5];
    let mut first = T::zero();
    for (range, width) in ranges.iter_mut().zip(widths) {
        let last = first + width - one;
        *range = Range::new(first, last);
        first = last + one;
    }
    // Bottom keeps the baseline width and always ends at the last member.
    ranges[4] = Range::new(first, population_count - one);
    ranges
}

/// A quintile partition of a population sorted from highest to lowest rank.
///
/// Index 0 is the highest-ranked member. The five ranges are contiguous,
/// never overlap, and together cover `0..population_count`. Groups may be
/// empty when the population has fewer than five members.
///
/// # Examples
/// ```
/// use quintile_distribution::{Distribution, Group, Range};
///
/// let distribution = Distribution::<i32>::new(10);
/// assert_eq!(distribution.top(), Range::new(0, 1));
/// assert_eq!(distribution.bottom(), Range::new(8, 9));
/// assert_eq!(distribution.find_quintile(5), Group::Median);
/// assert_eq!(distribution.find_quintile(9), Group::Bottom);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution<T: IndexStorage = i32> {
    population_count: T,
    strategy: Strategy,
    top: Range<T>,
    high: Range<T>,
    median: Range<T>,
    low: Range<T>,
    bottom: Range<T>,
}

impl<T: IndexStorage> Distribution<T> {
    /// Partitions a population of `population_count` members.
    pub fn new(population_count: u16) -> Self {
        Self::build(T::from_count(population_count))
    }

    /// Partitions a population given as a `usize` length.
    ///
    /// Returns [`DistributionError::PopulationTooLarge`] if the count does not
    /// fit the index type `T`.
    ///
    /// # Examples
    /// ```
    /// use quintile_distribution::{Distribution, DistributionError};
    ///
    /// let members = [90, 75, 60, 42, 7, 3];
    /// let distribution = Distribution::<i32>::try_new(members.len()).unwrap();
    /// assert_eq!(distribution.population_count(), 6);
    ///
    /// assert_eq!(
    ///     Distribution::<i32>::try_new(usize::MAX),
    ///     Err(DistributionError::PopulationTooLarge { count: usize::MAX })
    /// );
    /// ```
    pub fn try_new(population_count: usize) -> Result<Self, DistributionError> {
        let count = <T as NumCast>::from(population_count).ok_or(
            DistributionError::PopulationTooLarge {
                count: population_count,
            },
        )?;
        Ok(Self::build(count))
    }

    fn build(population_count: T) -> Self {
        let strategy = Strategy::select(population_count);
        log::trace!(
            "partitioning {:?} members with {:?} strategy",
            population_count,
            strategy
        );

        let [top, high, median, low, bottom] = strategy.lay_out(population_count);
        Self {
            population_count,
            strategy,
            top,
            high,
            median,
            low,
            bottom,
        }
    }

    /// Returns the group owning `population_index`.
    ///
    /// Median is checked first, then Top, High and Low; any index none of
    /// them claims, including negative indices and indices past the end of
    /// the population, is reported as `Bottom`.
    pub fn find_quintile(&self, population_index: T) -> Group {
        if self.median.is_member(population_index) {
            Group::Median
        } else if self.top.is_member(population_index) {
            Group::Top
        } else if self.high.is_member(population_index) {
            Group::High
        } else if self.low.is_member(population_index) {
            Group::Low
        } else {
            Group::Bottom
        }
    }

    /// Returns the population count the distribution was built from.
    #[inline]
    pub fn population_count(&self) -> T {
        self.population_count
    }

    /// Returns the layout selected at construction.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn top(&self) -> Range<T> {
        self.top
    }

    #[inline]
    pub fn high(&self) -> Range<T> {
        self.high
    }

    #[inline]
    pub fn median(&self) -> Range<T> {
        self.median
    }

    #[inline]
    pub fn low(&self) -> Range<T> {
        self.low
    }

    #[inline]
    pub fn bottom(&self) -> Range<T> {
        self.bottom
    }

    /// Returns the range assigned to `group`.
    pub fn range(&self, group: Group) -> Range<T> {
        match group {
            Group::Top => self.top,
            Group::High => self.high,
            Group::Median => self.median,
            Group::Low => self.low,
            Group::Bottom => self.bottom,
        }
    }

    /// Returns all five ranges in positional order, Top first.
    pub fn ranges(&self) -> [Range<T>; 5] {
        [self.top, self.high, self.median, self.low, self.bottom]
    }

    /// Iterates over `(group, range)` pairs in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (Group, Range<T>)> {
        Group::ALL.into_iter().zip(self.ranges())
    }
}
