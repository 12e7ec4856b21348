//! Staking error types.

use thiserror::Error;

/// Staking engine errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StakingError {
    /// The second round was played before the first classified a hand
    #[error("No hand has been classified yet; play the first round first")]
    HandNotClassified,

    /// Configuration failed validation
    #[error("Invalid staking configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for staking operations
pub type StakingResult<T> = Result<T, StakingError>;
