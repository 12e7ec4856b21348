//! Hand categories, strongest first.
//!
//! The enum's declaration order is the classification precedence. Many of
//! the predicates overlap (every suited pair of connectors is also a
//! straight flush, every pair of aces is also one pair), so the first
//! matching category in [`HandCategory::ALL`] wins.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    entities::{ACE, Card, JACK, KING, QUEEN, TEN, Value},
    functional::{
        all_values_in, contains_values, count_pairs, has_same_value, is_drawing_to_set, is_flush,
        is_four_to_flush, is_inside_draw, is_open_ended_draw, is_straight,
    },
};

const BROADWAY: [Value; 5] = [TEN, JACK, QUEEN, KING, ACE];
const JACK_UP: [Value; 4] = [JACK, QUEEN, KING, ACE];
const QUEEN_UP: [Value; 3] = [QUEEN, KING, ACE];
const NINE_UP: [Value; 6] = [9, TEN, JACK, QUEEN, KING, ACE];
const ACE_KING: [Value; 2] = [ACE, KING];

/// Cards must rank strictly above this to count as overcards.
pub const OVERCARD_FLOOR: Value = JACK;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum HandCategory {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    AceKingSuited,
    PocketAces,
    SuitedBroadway,
    AceKingOffsuit,
    PairAceToQueen,
    PairAceToJack,
    SuitedJackOrBetter,
    PairAceToTen,
    SuitedTenOrBetter,
    SuitedConnectors,
    ConnectedTenOrBetter,
    QueenOrBetter,
    JackOrBetter,
    TenOrBetter,
    Connected,
    NineOrBetter,
    UnconnectedUnsuited,
    OpenEndedStraightDraw,
    FourToAFlush,
    InsideStraightDraw,
    PairToTwoPairOrTrips,
    Overcards,
    DrawingToSet,
    HighCard,
}

impl HandCategory {
    pub const COUNT: usize = 33;

    /// Every category in precedence order.
    pub const ALL: [HandCategory; Self::COUNT] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPair,
        Self::OnePair,
        Self::AceKingSuited,
        Self::PocketAces,
        Self::SuitedBroadway,
        Self::AceKingOffsuit,
        Self::PairAceToQueen,
        Self::PairAceToJack,
        Self::SuitedJackOrBetter,
        Self::PairAceToTen,
        Self::SuitedTenOrBetter,
        Self::SuitedConnectors,
        Self::ConnectedTenOrBetter,
        Self::QueenOrBetter,
        Self::JackOrBetter,
        Self::TenOrBetter,
        Self::Connected,
        Self::NineOrBetter,
        Self::UnconnectedUnsuited,
        Self::OpenEndedStraightDraw,
        Self::FourToAFlush,
        Self::InsideStraightDraw,
        Self::PairToTwoPairOrTrips,
        Self::Overcards,
        Self::DrawingToSet,
        Self::HighCard,
    ];

    /// Whether this category's predicate holds for `cards`, ignoring every
    /// other category.
    pub fn matches(self, cards: &[Card]) -> bool {
        match self {
            Self::RoyalFlush => is_flush(cards) && contains_values(cards, &BROADWAY),
            Self::StraightFlush => is_flush(cards) && is_straight(cards),
            Self::FourOfAKind => has_same_value(cards, 4),
            Self::FullHouse => has_same_value(cards, 3) && has_same_value(cards, 2),
            Self::Flush => is_flush(cards),
            Self::Straight => is_straight(cards),
            Self::ThreeOfAKind => has_same_value(cards, 3),
            Self::TwoPair => count_pairs(cards) == 2,
            Self::OnePair => count_pairs(cards) == 1,
            Self::AceKingSuited => contains_values(cards, &ACE_KING) && is_flush(cards),
            Self::PocketAces => contains_values(cards, &[ACE]) && has_same_value(cards, 2),
            Self::SuitedBroadway => contains_values(cards, &BROADWAY) && is_flush(cards),
            Self::AceKingOffsuit => contains_values(cards, &ACE_KING),
            Self::PairAceToQueen => contains_values(cards, &QUEEN_UP) && has_same_value(cards, 2),
            Self::PairAceToJack => contains_values(cards, &JACK_UP) && has_same_value(cards, 2),
            Self::SuitedJackOrBetter => contains_values(cards, &JACK_UP) && is_flush(cards),
            Self::PairAceToTen => contains_values(cards, &BROADWAY) && has_same_value(cards, 2),
            Self::SuitedTenOrBetter => contains_values(cards, &BROADWAY) && is_flush(cards),
            Self::SuitedConnectors => is_flush(cards) && is_straight(cards),
            Self::ConnectedTenOrBetter => all_values_in(cards, TEN..=ACE) && is_straight(cards),
            Self::QueenOrBetter => contains_values(cards, &QUEEN_UP),
            Self::JackOrBetter => contains_values(cards, &JACK_UP),
            Self::TenOrBetter => contains_values(cards, &BROADWAY),
            Self::Connected => is_straight(cards),
            Self::NineOrBetter => contains_values(cards, &NINE_UP),
            Self::UnconnectedUnsuited => {
                !is_straight(cards) && !is_flush(cards) && all_values_in(cards, 2..=9)
            }
            Self::OpenEndedStraightDraw => is_open_ended_draw(cards),
            Self::FourToAFlush => is_four_to_flush(cards),
            Self::InsideStraightDraw => is_inside_draw(cards),
            // Only a full-house shape satisfies this, and FullHouse is
            // checked first.
            Self::PairToTwoPairOrTrips => {
                count_pairs(cards) == 1 && (count_pairs(cards) == 2 || has_same_value(cards, 3))
            }
            Self::Overcards => cards.iter().all(|card| card.value() > OVERCARD_FLOOR),
            // Near-vacuous: true for almost any single-pair hand of three or
            // more cards, not only for a pocket pair hunting a third card.
            Self::DrawingToSet => is_drawing_to_set(cards),
            Self::HighCard => true,
        }
    }

    /// Historical "odds against" for the category; smaller is more likely.
    pub const fn odds_against(self) -> f64 {
        match self {
            Self::RoyalFlush => 649739.0,
            Self::StraightFlush => 72192.0,
            Self::FourOfAKind => 4164.0,
            Self::FullHouse => 693.0,
            Self::Flush => 508.0,
            Self::Straight => 254.0,
            Self::ThreeOfAKind => 46.3,
            Self::TwoPair => 20.0,
            Self::OnePair => 1.37,
            Self::AceKingSuited => 330.5,
            Self::PocketAces => 220.0,
            Self::SuitedBroadway => 81.9,
            Self::AceKingOffsuit => 81.9,
            Self::PairAceToQueen => 72.7,
            Self::PairAceToJack => 54.25,
            Self::SuitedJackOrBetter => 54.25,
            Self::PairAceToTen => 43.2,
            Self::SuitedTenOrBetter => 32.2,
            Self::SuitedConnectors => 24.5,
            Self::ConnectedTenOrBetter => 19.7,
            Self::QueenOrBetter => 19.7,
            Self::JackOrBetter => 10.1,
            Self::TenOrBetter => 5.98,
            Self::Connected => 5.98,
            Self::NineOrBetter => 3.81,
            Self::UnconnectedUnsuited => 0.873,
            Self::OpenEndedStraightDraw => 4.8,
            Self::FourToAFlush => 4.1,
            Self::InsideStraightDraw => 10.5,
            Self::PairToTwoPairOrTrips => 8.2,
            Self::Overcards => 6.7,
            Self::DrawingToSet => 22.0,
            Self::HighCard => 0.995,
        }
    }

    /// Position in the precedence order, 0 being the strongest.
    pub fn precedence(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::RoyalFlush => "royal flush",
            Self::StraightFlush => "straight flush",
            Self::FourOfAKind => "four of a kind",
            Self::FullHouse => "full house",
            Self::Flush => "flush",
            Self::Straight => "straight",
            Self::ThreeOfAKind => "three of a kind",
            Self::TwoPair => "two pair",
            Self::OnePair => "one pair",
            Self::AceKingSuited => "AKs",
            Self::PocketAces => "AA",
            Self::SuitedBroadway => "AKs KQs QJs JTs",
            Self::AceKingOffsuit => "AK",
            Self::PairAceToQueen => "AA KK QQ",
            Self::PairAceToJack => "AA KK QQ JJ",
            Self::SuitedJackOrBetter => "suited, jack or better",
            Self::PairAceToTen => "AA KK QQ JJ TT",
            Self::SuitedTenOrBetter => "suited, ten or better",
            Self::SuitedConnectors => "suited connectors",
            Self::ConnectedTenOrBetter => "connected, ten or better",
            Self::QueenOrBetter => "any two, queen or better",
            Self::JackOrBetter => "any two, jack or better",
            Self::TenOrBetter => "any two, ten or better",
            Self::Connected => "connected",
            Self::NineOrBetter => "any two, nine or better",
            Self::UnconnectedUnsuited => "unconnected and unsuited, 2-9",
            Self::OpenEndedStraightDraw => "open-ended straight draw",
            Self::FourToAFlush => "four to a flush",
            Self::InsideStraightDraw => "inside straight draw",
            Self::PairToTwoPairOrTrips => "one pair to two pair or trips",
            Self::Overcards => "overcards",
            Self::DrawingToSet => "drawing to a set",
            Self::HighCard => "high card",
        };
        write!(f, "{repr}")
    }
}
