//! Staking configuration and per-hand agent state.

use serde::{Deserialize, Serialize};

use super::errors::{StakingError, StakingResult};
use crate::game::{category::HandCategory, entities::Usd};

/// Chips every agent starts a hand with.
pub const DEFAULT_STACK: Usd = 1000;

/// Smallest bet the agent ever places.
pub const DEFAULT_MIN_BET: Usd = 10;

/// Pot assumed when the first round opens (standard preset).
pub const STANDARD_SEED_POT: Usd = 350;

/// Pot assumed when the first round opens (capped preset).
pub const CAPPED_SEED_POT: Usd = 100;

/// Hard ceiling on the first bet (capped preset).
pub const CAPPED_BET_LIMIT: Usd = 400;

/// Upper bound applied to the first bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetCap {
    /// Never bet more than the agent's stack
    Stack,
    /// Never bet more than a fixed amount
    Fixed(Usd),
}

/// Staking configuration.
///
/// Two presets exist because two sets of constants were in circulation:
/// [`StakingConfig::standard`] seeds the pot with 350 and caps bets at the
/// stack, [`StakingConfig::capped`] seeds it with 100 and caps bets at 400.
/// The standard preset is the default.
///
/// # Examples
///
/// ```
/// use odds_poker::bot::models::{BetCap, StakingConfig};
///
/// let config = StakingConfig::default();
/// assert_eq!(config.seed_pot, 350);
/// assert_eq!(config.bet_cap, BetCap::Stack);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingConfig {
    /// Chips held at the start of the hand. Read, never spent.
    pub starting_stack: Usd,

    /// Pot size the first round assumes.
    pub seed_pot: Usd,

    /// Minimum bet and the first round's call amount.
    pub min_bet: Usd,

    /// Ceiling on the first bet.
    pub bet_cap: BetCap,
}

impl StakingConfig {
    /// Seed 350, capped by the stack
    pub fn standard() -> Self {
        Self {
            starting_stack: DEFAULT_STACK,
            seed_pot: STANDARD_SEED_POT,
            min_bet: DEFAULT_MIN_BET,
            bet_cap: BetCap::Stack,
        }
    }

    /// Seed 100, capped at 400
    pub fn capped() -> Self {
        Self {
            starting_stack: DEFAULT_STACK,
            seed_pot: CAPPED_SEED_POT,
            min_bet: DEFAULT_MIN_BET,
            bet_cap: BetCap::Fixed(CAPPED_BET_LIMIT),
        }
    }

    /// Resolved ceiling on the first bet.
    pub fn upper_bound(&self) -> Usd {
        match self.bet_cap {
            BetCap::Stack => self.starting_stack,
            BetCap::Fixed(limit) => limit,
        }
    }

    /// Validate configuration
    ///
    /// # Returns
    ///
    /// * `StakingResult<()>` - Success or the first violated constraint
    pub fn validate(&self) -> StakingResult<()> {
        if self.seed_pot == 0 {
            return Err(StakingError::InvalidConfig(
                "seed pot must be greater than 0".to_string(),
            ));
        }

        if self.min_bet == 0 {
            return Err(StakingError::InvalidConfig(
                "minimum bet must be greater than 0".to_string(),
            ));
        }

        if self.min_bet > self.starting_stack {
            return Err(StakingError::InvalidConfig(format!(
                "minimum bet ({}) exceeds the stack ({})",
                self.min_bet, self.starting_stack
            )));
        }

        if self.upper_bound() < self.min_bet {
            return Err(StakingError::InvalidConfig(format!(
                "bet cap ({}) is below the minimum bet ({})",
                self.upper_bound(),
                self.min_bet
            )));
        }

        Ok(())
    }
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Mutable state for one hand.
///
/// Created before the first round, updated by both rounds, then thrown away.
/// A new hand needs a new engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentState {
    /// Chips held; fixed for the life of the hand
    pub stack: Usd,

    /// Running pot total
    pub pot_size: f64,

    /// Call amount for the current round
    pub amount_to_call: f64,

    /// Category from the first round, if it has been played
    pub category: Option<HandCategory>,

    /// Odds against cached by the first round
    pub hand_odds: Option<f64>,
}

impl AgentState {
    pub fn new(stack: Usd) -> Self {
        Self {
            stack,
            pot_size: 0.0,
            amount_to_call: 0.0,
            category: None,
            hand_odds: None,
        }
    }
}
