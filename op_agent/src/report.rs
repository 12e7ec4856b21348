//! Outcome of one replayed hand, printable as text or JSON.

use odds_poker::game::{Card, HandCategory, Usd};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandReport {
    pub hand: Vec<String>,
    pub category: HandCategory,
    pub label: String,
    pub odds_against: f64,
    pub first_bet: Usd,
    pub highest_bet: Usd,
    pub pot_size: f64,
    pub continue_betting: bool,
}

impl HandReport {
    pub fn new(
        cards: &[Card],
        category: HandCategory,
        odds_against: f64,
        first_bet: Usd,
        highest_bet: Usd,
        pot_size: f64,
        continue_betting: bool,
    ) -> Self {
        Self {
            hand: cards.iter().map(Card::to_string).collect(),
            category,
            label: category.to_string(),
            odds_against,
            first_bet,
            highest_bet,
            pot_size,
            continue_betting,
        }
    }
}

impl fmt::Display for HandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "hand:         {}", self.hand.join(" "))?;
        writeln!(f, "category:     {}", self.label)?;
        writeln!(f, "odds against: {}", self.odds_against)?;
        writeln!(f, "first bet:    {}", self.first_bet)?;
        writeln!(f, "highest bet:  {}", self.highest_bet)?;
        writeln!(f, "pot:          {}", self.pot_size)?;
        let decision = if self.continue_betting { "yes" } else { "no" };
        write!(f, "continue:     {decision}")
    }
}
