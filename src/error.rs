use thiserror_no_std::Error;

/// Errors returned when building a [`crate::Distribution`] from an arbitrary
/// population length.
///
/// Construction from a `u16` count never fails; this only arises through
/// [`crate::Distribution::try_new`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum DistributionError {
    /// The population count cannot be represented by the index type
    #[error("population of {count} members does not fit the index type")]
    PopulationTooLarge { count: usize },
}

/// Returned when a string does not name one of the five quintile groups.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
#[error("unrecognized quintile group name")]
pub struct ParseGroupError;
