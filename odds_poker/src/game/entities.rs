use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::errors::CardParseError;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Spade,
    Diamond,
    Heart,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Self::Club, Self::Spade, Self::Diamond, Self::Heart];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Club => "♣",
            Self::Spade => "♠",
            Self::Diamond => "♦",
            Self::Heart => "♥",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "C" | "♣" => Ok(Self::Club),
            "s" | "S" | "♠" => Ok(Self::Spade),
            "d" | "D" | "♦" => Ok(Self::Diamond),
            "h" | "H" | "♥" => Ok(Self::Heart),
            other => Err(CardParseError::InvalidSuit(other.to_string())),
        }
    }
}

/// Placeholder for card values.
pub type Value = u8;

pub const TEN: Value = 10;
pub const JACK: Value = 11;
pub const QUEEN: Value = 12;
pub const KING: Value = 13;
pub const ACE: Value = 14;

/// A card is a tuple of a uInt8 value (two=2u8 ... ace=14u8) and a suit.
/// Aces are always high; there is no ace-low representation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl Card {
    pub fn value(&self) -> Value {
        self.0
    }

    pub fn suit(&self) -> Suit {
        self.1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            ACE => write!(f, "A{}", self.1),
            JACK => write!(f, "J{}", self.1),
            QUEEN => write!(f, "Q{}", self.1),
            KING => write!(f, "K{}", self.1),
            v => write!(f, "{v}{}", self.1),
        }
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses `As`, `10h`, `Td`, `7♣` and friends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_start = s
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .ok_or(CardParseError::Empty)?;
        let (value, suit) = s.split_at(suit_start);
        let value = match value.to_ascii_uppercase().as_str() {
            "A" => ACE,
            "K" => KING,
            "Q" => QUEEN,
            "J" => JACK,
            "T" | "10" => TEN,
            digit => match digit.parse::<Value>() {
                Ok(v) if (2..=9).contains(&v) => v,
                _ => return Err(CardParseError::InvalidRank(value.to_string())),
            },
        };
        Ok(Self(value, suit.parse()?))
    }
}

/// Parses a hand written as whitespace and/or comma separated cards.
pub fn parse_hand(s: &str) -> Result<Vec<Card>, CardParseError> {
    let cards = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Card>, _>>()?;
    if cards.is_empty() {
        return Err(CardParseError::Empty);
    }
    Ok(cards)
}

/// Type alias for whole chips. All bets, pots, and stacks handed across the
/// public API are whole chips; fractional amounts only exist mid-calculation.
pub type Usd = u32;
