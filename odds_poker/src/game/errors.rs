//! Game error types.

use thiserror::Error;

use super::category::HandCategory;

/// Card parsing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    /// Nothing to parse
    #[error("Empty card or hand")]
    Empty,

    /// Rank outside 2-10, J, Q, K, A
    #[error("Invalid rank: {0:?}")]
    InvalidRank(String),

    /// Suit outside c, s, d, h (or their symbols)
    #[error("Invalid suit: {0:?}")]
    InvalidSuit(String),
}

/// Odds table construction errors
#[derive(Debug, Error)]
pub enum OddsTableError {
    /// A category has no odds entry
    #[error("Odds table is missing category {0:?}")]
    MissingCategory(HandCategory),

    /// Odds must be finite and positive
    #[error("Invalid odds for {category:?}: {value}")]
    InvalidOdds { category: HandCategory, value: f64 },

    /// Malformed JSON or unknown category key
    #[error("Odds table JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for odds table operations
pub type OddsTableResult<T> = Result<T, OddsTableError>;
