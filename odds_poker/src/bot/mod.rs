//! Staking agent built on pot odds.
//!
//! This module implements:
//! - StakingEngine: one hand's two-round betting decisions
//! - StakingConfig: stack, seed pot, minimum bet, and bet cap, with presets
//! - The pot-odds formula and the bet-sizing ladder as free functions
//!
//! ## Protocol
//!
//! 1. `first_bet(hand)` classifies the hand, caches its odds against, seeds
//!    the pot, and returns a bet sized as a share of the pot.
//! 2. `second_bet(highest_bet)` adds the table's highest bet to the pot and
//!    returns whether the cached odds still clear the new pot odds.
//!
//! ## Bet Sizing
//!
//! | Odds against | Share of pot |
//! |--------------|--------------|
//! | < 0.1        | 100%         |
//! | < 1          | 75%          |
//! | < 5          | 50%          |
//! | < 10         | 25%          |
//! | otherwise    | 5%           |
//!
//! ## Example
//!
//! ```
//! use odds_poker::bot::{StakingConfig, StakingEngine};
//! use odds_poker::game::parse_hand;
//!
//! let hand = parse_hand("2c 2d 5h 9s Kd").unwrap();
//! let mut engine = StakingEngine::with_config(StakingConfig::standard()).unwrap();
//!
//! assert_eq!(engine.first_bet(&hand), 175);
//! assert!(engine.second_bet(40).unwrap());
//! ```

pub mod decision;
pub mod errors;
pub mod models;

pub use decision::{BettingAgent, StakingEngine, bet_amount, betting_factor, pot_odds, should_bet};
pub use errors::{StakingError, StakingResult};
pub use models::{AgentState, BetCap, StakingConfig};
