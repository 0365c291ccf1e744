use core::fmt;
use core::hash::Hash;
use core::ops::RangeInclusive;

use num_traits::{PrimInt, Signed};

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for isize {}
}

/// Trait for signed integer types that can hold a population index.
///
/// This trait is sealed and only implemented for `i32`, `i64`, and `isize`.
/// Every implementor can represent any population count up to `u16::MAX`,
/// and is signed so that an empty range can be encoded as `last < first`
/// starting at index zero.
///
/// | Storage | Max Population         |
/// |---------|------------------------|
/// | `i32`   | 2,147,483,647          |
/// | `i64`   | ~9.22 quintillion      |
/// | `isize` | same as `i64`*         |
///
/// *On 64-bit platforms. On 32-bit, same as `i32`.
pub trait IndexStorage: private::Sealed + PrimInt + Signed + Hash + fmt::Debug + 'static {
    /// Widens a population count into the index type.
    fn from_count(count: u16) -> Self;
}

impl IndexStorage for i32 {
    #[inline]
    fn from_count(count: u16) -> Self {
        i32::from(count)
    }
}

impl IndexStorage for i64 {
    #[inline]
    fn from_count(count: u16) -> Self {
        i64::from(count)
    }
}

impl IndexStorage for isize {
    #[inline]
    fn from_count(count: u16) -> Self {
        // Lossless on every target with at least 32-bit pointers.
        count as isize
    }
}

/// A closed interval of population indices, `first..=last`.
///
/// Both bounds are stored verbatim. A range whose `last` is below its `first`
/// is empty and marks a group with no members; nothing, not even a negative
/// index, is a member of an empty range.
///
/// # Type Parameters
/// - `T`: The index type (`i32`, `i64`, or `isize`). Defaults to `i32`.
///
/// # Examples
/// ```
/// use quintile_distribution::Range;
///
/// let range = Range::new(2, 4);
/// assert!(range.is_member(2));
/// assert!(range.is_member(4));
/// assert!(!range.is_member(5));
/// assert_eq!(range.len(), 3);
///
/// let unused = Range::new(0, -1);
/// assert!(unused.is_empty());
/// assert!(!unused.is_member(0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T: IndexStorage = i32> {
    first: T,
    last: T,
}

impl<T: IndexStorage> Range<T> {
    /// Creates a range from its first and last member, both inclusive.
    ///
    /// No validation is performed: `first > last` is accepted and yields an
    /// empty range.
    #[inline]
    pub fn new(first: T, last: T) -> Self {
        Self { first, last }
    }

    /// Returns the canonical empty range, `0..=-1`.
    #[inline]
    pub fn empty() -> Self {
        Self::new(T::zero(), -T::one())
    }

    /// Returns the first member index.
    #[inline]
    pub fn first(&self) -> T {
        self.first
    }

    /// Returns the last member index (inclusive).
    #[inline]
    pub fn last(&self) -> T {
        self.last
    }

    /// Returns `true` if `first <= population_index <= last`.
    #[inline]
    pub fn is_member(&self, population_index: T) -> bool {
        self.first <= population_index && population_index <= self.last
    }

    /// Returns `true` if the range has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    /// Returns the number of members in the range.
    ///
    /// Saturates at `usize::MAX` for ranges wider than the address space.
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let width = self
            .last
            .to_i128()
            .zip(self.first.to_i128())
            .map(|(last, first)| last - first + 1);
        width
            .and_then(|width| usize::try_from(width).ok())
            .unwrap_or(usize::MAX)
    }

    /// Converts the range to a standard `RangeInclusive<T>`.
    #[inline]
    pub fn to_range_inclusive(&self) -> RangeInclusive<T> {
        self.first..=self.last
    }
}

impl<T: IndexStorage> Default for Range<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: IndexStorage> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}

impl<T: IndexStorage> IntoIterator for Range<T>
where
    RangeInclusive<T>: Iterator<Item = T>,
{
    type Item = T;
    type IntoIter = RangeInclusive<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_range_inclusive()
    }
}

impl<T: IndexStorage> IntoIterator for &Range<T>
where
    RangeInclusive<T>: Iterator<Item = T>,
{
    type Item = T;
    type IntoIter = RangeInclusive<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_range_inclusive()
    }
}
