#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use quintile_distribution::{Distribution, Group, Range};
//!
//! // A population of 12 members, sorted from highest to lowest rank
//! let distribution = Distribution::<i32>::new(12);
//!
//! assert_eq!(distribution.top(), Range::new(0, 1));
//! assert_eq!(distribution.high(), Range::new(2, 4));
//! assert_eq!(distribution.median(), Range::new(5, 6));
//! assert_eq!(distribution.low(), Range::new(7, 9));
//! assert_eq!(distribution.bottom(), Range::new(10, 11));
//!
//! assert_eq!(distribution.find_quintile(0), Group::Top);
//! assert_eq!(distribution.find_quintile(6), Group::Median);
//!
//! // Walk the groups in positional order
//! for (group, range) in distribution.iter() {
//!     println!("{}: {} members", group, range.len());
//! }
//! ```
//!
//! # Small Populations
//!
//! Below five members a true quintile split is impossible, and a fixed table
//! decides which groups receive members:
//!
//! ```rust
//! use quintile_distribution::{Distribution, Group, Strategy};
//!
//! let distribution = Distribution::<i32>::new(4);
//! assert_eq!(distribution.strategy(), Strategy::Small);
//! assert!(distribution.median().is_empty());
//! assert_eq!(distribution.find_quintile(1), Group::High);
//! assert_eq!(distribution.find_quintile(2), Group::Low);
//!
//! // An empty population still answers queries: index 0 is Median
//! let empty = Distribution::<i32>::new(0);
//! assert_eq!(empty.find_quintile(0), Group::Median);
//! ```
//!
//! # Index Types
//!
//! Ranges and distributions are generic over `i32` (the default), `i64` and
//! `isize`. Every index type accepts any `u16` population count, and
//! [`Distribution::try_new`] takes a `usize` length directly:
//!
//! ```rust
//! use quintile_distribution::Distribution;
//!
//! let members = [9u8; 23];
//! let distribution = Distribution::<isize>::try_new(members.len()).unwrap();
//! assert_eq!(distribution.bottom().last(), 22);
//! assert_eq!(distribution, Distribution::<isize>::new(23));
//! ```

mod distribution;
mod error;
mod group;
mod range;

pub use distribution::{Distribution, Strategy};
pub use error::{DistributionError, ParseGroupError};
pub use group::Group;
pub use range::{IndexStorage, Range};

#[cfg(test)]
#[path = "tests/range_tests.rs"]
mod range_tests;

#[cfg(test)]
#[path = "tests/group_tests.rs"]
mod group_tests;

#[cfg(test)]
#[path = "tests/distribution_tests.rs"]
mod distribution_tests;
