//! Command-line driver for the pot-odds staking agent.
//!
//! The binary parses arguments and sets up logging; everything after that
//! lives here so it can be driven from tests.

pub mod config;
pub mod report;

use std::{fs, path::Path};

use anyhow::{Context, Error, anyhow};
use log::info;
use odds_poker::{
    bot::StakingEngine,
    game::{OddsTable, Usd, parse_hand},
};

pub use config::{AgentConfig, ConfigError};
pub use report::HandReport;

/// Highest bet assumed for the second round when none is given.
pub const DEFAULT_HIGHEST_BET: Usd = 50;

/// Load an odds table from a JSON file.
pub fn load_odds_table(path: &Path) -> Result<OddsTable, Error> {
    info!("Loading odds table from {}", path.display());
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    OddsTable::from_json(&json).with_context(|| format!("Invalid odds table {}", path.display()))
}

/// Play `hand` through both rounds under `config`.
///
/// # Errors
///
/// Fails on invalid configuration, an unreadable odds table, or a hand
/// that doesn't parse.
pub fn run(config: &AgentConfig, hand: &str, highest_bet: Usd) -> Result<HandReport, Error> {
    config.validate()?;
    info!("Staking with {:?}", config.staking);

    let odds_table = match &config.odds_table {
        Some(path) => load_odds_table(path)?,
        None => OddsTable::default(),
    };

    let cards = parse_hand(hand)?;
    let mut engine =
        StakingEngine::with_config(config.staking.clone())?.with_odds_table(odds_table);

    let first_bet = engine.first_bet(&cards);
    let category = engine
        .state()
        .category
        .ok_or_else(|| anyhow!("First round left the hand unclassified"))?;
    let odds_against = engine
        .hand_odds()
        .ok_or_else(|| anyhow!("First round left no odds to reuse"))?;

    let continue_betting = engine.second_bet(highest_bet)?;

    Ok(HandReport::new(
        &cards,
        category,
        odds_against,
        first_bet,
        highest_bet,
        engine.pot_size(),
        continue_betting,
    ))
}

/// Render a report as pretty JSON or as text.
pub fn render(report: &HandReport, json: bool) -> Result<String, Error> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}
