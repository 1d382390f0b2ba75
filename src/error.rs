//! Error type shared by every fallible operation in the crate.

use thiserror::Error as ThisError;

/// Errors surfaced before or instead of a construction run.
///
/// None of these are recoverable inside a run: once inputs are validated,
/// the construction kernels are total functions.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Fewer than two nodes, mismatched lengths, negative costs, or
    /// non-finite coordinates.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),
    /// A strategy identifier that does not name any known heuristic.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
    /// Bad trial count, missing or out-of-range start node, or a
    /// selection size the instance cannot satisfy.
    #[error("invalid trial request: {0}")]
    InvalidTrialRequest(String),
    /// A node sequence that is not a valid cycle over the instance.
    #[error("invalid tour: {0}")]
    InvalidTour(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_instance(message: impl Into<String>) -> Self {
        Self::InvalidInstance(message.into())
    }

    pub fn unknown_strategy(message: impl Into<String>) -> Self {
        Self::UnknownStrategy(message.into())
    }

    pub fn invalid_trial_request(message: impl Into<String>) -> Self {
        Self::InvalidTrialRequest(message.into())
    }

    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }
}
