use core::fmt;
use core::str::FromStr;

use crate::error::ParseGroupError;

/// One of the five quintile groups of a ranked population.
///
/// Variants are declared in positional order, from the highest-ranked block
/// (`Top`) to the lowest-ranked block (`Bottom`), and compare in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Group {
    Top,
    High,
    Median,
    Low,
    Bottom,
}

impl Group {
    /// All groups in positional order.
    pub const ALL: [Group; 5] = [
        Group::Top,
        Group::High,
        Group::Median,
        Group::Low,
        Group::Bottom,
    ];

    /// Position of the group's block, 0 for `Top` through 4 for `Bottom`.
    #[inline]
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Lowercase name of the group.
    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Top => "top",
            Group::High => "high",
            Group::Median => "median",
            Group::Low => "low",
            Group::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = ParseGroupError;

    /// Parses a group name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseGroupError)
    }
}
