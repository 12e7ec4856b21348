//! Pot-odds staking decisions.

use super::{
    errors::{StakingError, StakingResult},
    models::{AgentState, StakingConfig},
};
use crate::game::{
    classifier::classify,
    entities::{Card, Usd},
    odds::OddsTable,
};

// === Bet Sizing Ladder ===
// Odds-against thresholds, checked low to high; the first one the hand's
// odds fall under picks the share of the pot to bet.

/// Below this the whole pot goes in
const VERY_STRONG_ODDS: f64 = 0.1;

/// Below this bet three quarters of the pot
const STRONG_ODDS: f64 = 1.0;

/// Below this bet half the pot
const MEDIUM_ODDS: f64 = 5.0;

/// Below this bet a quarter of the pot
const MARGINAL_ODDS: f64 = 10.0;

const VERY_STRONG_FACTOR: f64 = 1.0;
const STRONG_FACTOR: f64 = 0.75;
const MEDIUM_FACTOR: f64 = 0.5;
const MARGINAL_FACTOR: f64 = 0.25;
const WEAK_FACTOR: f64 = 0.05;

/// Calculate pot odds (share of the post-call pot the call represents)
///
/// # Arguments
///
/// * `amount_to_call` - Amount needed to call
/// * `pot_size` - Current pot size
///
/// # Returns
///
/// * `f64` - `amount_to_call / (pot_size + amount_to_call)`, or 0.0 when
///   there's nothing in the pot and nothing to call
pub fn pot_odds(amount_to_call: f64, pot_size: f64) -> f64 {
    let total_pot = pot_size + amount_to_call;
    if total_pot <= 0.0 {
        return 0.0;
    }

    // Example: $100 pot, $10 to call = 10 / 110 = 0.0909
    amount_to_call / total_pot
}

/// Whether the hand's odds against clear the pot odds.
///
/// Odds against grow as a category gets rarer, so a larger value passes
/// more easily. This is the comparison the agent has always made; it is not
/// textbook pot-odds play.
pub fn should_bet(hand_odds: f64, pot_odds: f64) -> bool {
    hand_odds >= pot_odds
}

/// Share of the pot to bet for a hand with the given odds against.
pub fn betting_factor(hand_odds: f64) -> f64 {
    match hand_odds {
        x if x < VERY_STRONG_ODDS => VERY_STRONG_FACTOR,
        x if x < STRONG_ODDS => STRONG_FACTOR,
        x if x < MEDIUM_ODDS => MEDIUM_FACTOR,
        x if x < MARGINAL_ODDS => MARGINAL_FACTOR,
        _ => WEAK_FACTOR,
    }
}

/// Raw bet for a pot and sizing factor, before any cap.
pub fn bet_amount(pot_size: f64, factor: f64) -> f64 {
    pot_size * factor
}

/// The two-round betting protocol a game loop drives.
pub trait BettingAgent {
    /// Open the hand: classify `cards` and return the first bet.
    fn first_bet(&mut self, cards: &[Card]) -> Usd;

    /// Given the table's highest bet, decide whether to stay in.
    fn second_bet(&mut self, highest_bet: Usd) -> StakingResult<bool>;
}

/// Pot-odds driven staking agent for a single hand.
///
/// # Examples
///
/// ```
/// use odds_poker::bot::StakingEngine;
/// use odds_poker::game::entities::{Card, Suit};
///
/// let mut engine = StakingEngine::new();
/// let bet = engine.first_bet(&[Card(7, Suit::Heart), Card(2, Suit::Club)]);
/// assert_eq!(bet, 262);
/// assert!(engine.second_bet(50).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct StakingEngine {
    config: StakingConfig,
    odds_table: OddsTable,
    state: AgentState,
}

impl StakingEngine {
    /// Create a new engine with the standard config and odds table
    pub fn new() -> Self {
        let config = StakingConfig::default();
        Self {
            state: AgentState::new(config.starting_stack),
            odds_table: OddsTable::default(),
            config,
        }
    }

    /// Create a new engine with a custom config
    ///
    /// # Errors
    ///
    /// Returns `StakingError::InvalidConfig` if the config fails validation.
    pub fn with_config(config: StakingConfig) -> StakingResult<Self> {
        config.validate()?;
        Ok(Self {
            state: AgentState::new(config.starting_stack),
            odds_table: OddsTable::default(),
            config,
        })
    }

    /// Swap in a custom odds table.
    pub fn with_odds_table(mut self, odds_table: OddsTable) -> Self {
        self.odds_table = odds_table;
        self
    }

    pub fn config(&self) -> &StakingConfig {
        &self.config
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn stack(&self) -> Usd {
        self.state.stack
    }

    pub fn pot_size(&self) -> f64 {
        self.state.pot_size
    }

    pub fn amount_to_call(&self) -> f64 {
        self.state.amount_to_call
    }

    pub fn hand_odds(&self) -> Option<f64> {
        self.state.hand_odds
    }

    /// Pot odds for the current round's state.
    pub fn current_pot_odds(&self) -> f64 {
        pot_odds(self.state.amount_to_call, self.state.pot_size)
    }

    /// First round. Classifies the hand, caches its odds for the second
    /// round, and sizes a bet off the seeded pot.
    ///
    /// # Returns
    ///
    /// * `Usd` - Between the minimum bet and the configured upper bound
    pub fn first_bet(&mut self, cards: &[Card]) -> Usd {
        if self.state.hand_odds.is_some() {
            log::warn!("First round replayed on the same hand; reseeding the pot");
        }

        let category = classify(cards);
        let hand_odds = self.odds_table.odds_against(category);
        self.state.category = Some(category);
        self.state.hand_odds = Some(hand_odds);

        self.state.pot_size = f64::from(self.config.seed_pot);
        self.state.amount_to_call = f64::from(self.config.min_bet);

        let pot_odds = self.current_pot_odds();
        log::debug!("Classified {category} at odds against {hand_odds}; pot odds {pot_odds:.4}");

        if !should_bet(hand_odds, pot_odds) {
            log::info!(
                "Not worth betting; placing the minimum of {}",
                self.config.min_bet
            );
            return self.config.min_bet;
        }

        let factor = betting_factor(hand_odds);
        let raw = bet_amount(self.state.pot_size, factor);
        log::debug!("Ideal first bet {raw} ({factor} of the pot)");

        let bet = raw
            .min(f64::from(self.config.upper_bound()))
            .max(f64::from(self.config.min_bet));
        self.state.amount_to_call = bet;

        // Truncates toward zero.
        let bet = bet as Usd;
        log::info!("First bet: {bet}");
        bet
    }

    /// Second round. Folds the table's highest bet into the pot and decides
    /// whether to continue using the odds cached by [`Self::first_bet`].
    ///
    /// # Errors
    ///
    /// Returns `StakingError::HandNotClassified` if the first round hasn't
    /// been played.
    pub fn second_bet(&mut self, highest_bet: Usd) -> StakingResult<bool> {
        let Some(hand_odds) = self.state.hand_odds else {
            log::warn!("Second round requested before the first");
            return Err(StakingError::HandNotClassified);
        };

        self.state.pot_size += f64::from(highest_bet);
        self.state.amount_to_call = f64::from(highest_bet);

        let pot_odds = self.current_pot_odds();
        log::debug!("Second round pot odds {pot_odds:.4}");

        let keep_betting = should_bet(hand_odds, pot_odds);
        if keep_betting {
            let ideal = bet_amount(self.state.pot_size, betting_factor(hand_odds));
            log::debug!("Ideal second bet {ideal}");
        }

        log::info!("Continue betting: {keep_betting}");
        Ok(keep_betting)
    }
}

impl Default for StakingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BettingAgent for StakingEngine {
    fn first_bet(&mut self, cards: &[Card]) -> Usd {
        StakingEngine::first_bet(self, cards)
    }

    fn second_bet(&mut self, highest_bet: Usd) -> StakingResult<bool> {
        StakingEngine::second_bet(self, highest_bet)
    }
}
