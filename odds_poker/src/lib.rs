//! # Odds Poker
//!
//! A pot-odds staking agent for a simplified betting game.
//!
//! Given a hand of cards, the agent classifies it into one of 33 ordered
//! categories (made hands, starting-hand groups, and draws), looks up the
//! category's historical "odds against", compares that to the pot odds of
//! the current round, and sizes a bet.
//!
//! ## Core Modules
//!
//! - [`game`]: Cards, hand predicates, the category taxonomy, and odds
//! - [`bot`]: The two-round staking engine and its configuration
//!
//! ## Example
//!
//! ```
//! use odds_poker::{HandCategory, StakingEngine, classify, parse_hand};
//!
//! let hand = parse_hand("10s Js Qs Ks As").unwrap();
//! assert_eq!(classify(&hand), HandCategory::RoyalFlush);
//!
//! let mut engine = StakingEngine::new();
//! let bet = engine.first_bet(&hand);
//! assert_eq!(bet, 17);
//! ```

/// Card model, classification, and odds.
pub mod game;
pub use game::{
    Card, CardParseError, HandCategory, OddsTable, OddsTableError, Suit, Usd, Value, classify,
    classify_with_odds, entities, parse_hand,
};

/// Staking decisions.
pub mod bot;
pub use bot::{BettingAgent, StakingConfig, StakingEngine, StakingError};
