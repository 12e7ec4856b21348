//! Card model and hand classification.
//!
//! This module provides:
//! - Cards, suits, and their text form
//! - Pattern predicates over a hand
//! - The ordered category taxonomy and its classifier
//! - The "odds against" table keyed by category

pub mod category;
pub mod classifier;
pub mod entities;
pub mod errors;
pub mod functional;
pub mod odds;

pub use category::HandCategory;
pub use classifier::{classify, classify_with_odds};
pub use entities::{Card, Suit, Usd, Value, parse_hand};
pub use errors::{CardParseError, OddsTableError, OddsTableResult};
pub use odds::OddsTable;
