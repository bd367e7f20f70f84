// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Errors surfaced by ordered set operations.

use thiserror::Error;

/// Error returned by set operations.
///
/// `E` is the error type of the order relation in use. A comparison failure
/// is passed through unchanged so the caller sees the element domain's own
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<E> {
    /// The order relation failed on some pair of values.
    #[error("comparison failed: {0}")]
    Comparison(E),
    /// Strict removal or lookup of a value that is not in the set.
    #[error("value is not in the set")]
    NotFound,
    /// A node could not be allocated.
    #[error("node allocation failed")]
    AllocationFailure,
}

impl<E> Error<E> {
    /// Return true if this is a comparison failure.
    pub fn is_comparison(&self) -> bool {
        return matches!(self, Error::Comparison(_));
    }

    /// Return true if the value was not found.
    pub fn is_not_found(&self) -> bool {
        return matches!(self, Error::NotFound);
    }
}

/// Error returned when a [`Config`](crate::Config) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `max_level` must lie in `1..=MAX_LEVEL_LIMIT`.
    #[error("max_level must be between 1 and {limit}, got {0}", limit = crate::config::MAX_LEVEL_LIMIT)]
    InvalidMaxLevel(usize),
    /// `probability` must lie strictly between 0 and 1.
    #[error("probability must be strictly between 0 and 1, got {0}")]
    InvalidProbability(f64),
}
