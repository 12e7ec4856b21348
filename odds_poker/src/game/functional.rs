//! Pattern predicates over a hand of cards.
//!
//! Every predicate is a pure function of the cards it's given. None of them
//! care about card order and none of them validate hand size; a two-card
//! starting hand and a five-card made hand go through the same code.

use std::collections::BTreeMap;

use super::entities::{Card, Suit, Value};

/// Ranks sorted ascending, duplicates kept.
pub fn sorted_values(cards: &[Card]) -> Vec<Value> {
    let mut values: Vec<Value> = cards.iter().map(Card::value).collect();
    values.sort_unstable();
    values
}

/// Number of cards per rank.
pub fn value_counts(cards: &[Card]) -> BTreeMap<Value, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.value()).or_insert(0) += 1;
    }
    counts
}

/// Number of cards per suit.
pub fn suit_counts(cards: &[Card]) -> BTreeMap<Suit, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.suit()).or_insert(0) += 1;
    }
    counts
}

/// All cards share exactly one suit. An empty hand has no suit, so it isn't
/// a flush.
pub fn is_flush(cards: &[Card]) -> bool {
    suit_counts(cards).len() == 1
}

/// `high` sits exactly `gap` ranks above `low`.
fn steps_by(low: Value, high: Value, gap: Value) -> bool {
    high.checked_sub(low) == Some(gap)
}

/// Sorted ranks climb by exactly one at every step. Aces only play high.
pub fn is_straight(cards: &[Card]) -> bool {
    sorted_values(cards)
        .windows(2)
        .all(|w| steps_by(w[0], w[1], 1))
}

/// Some rank appears in exactly `n` cards.
pub fn has_same_value(cards: &[Card], n: usize) -> bool {
    value_counts(cards).values().any(|&count| count == n)
}

/// Number of ranks that appear exactly twice.
pub fn count_pairs(cards: &[Card]) -> usize {
    value_counts(cards)
        .values()
        .filter(|&&count| count == 2)
        .count()
}

/// Every rank in `values` is present at least once. This checks presence
/// only; the hand may hold anything else besides.
pub fn contains_values(cards: &[Card], values: &[Value]) -> bool {
    values
        .iter()
        .all(|value| cards.iter().any(|card| card.value() == *value))
}

/// Every card's rank falls within `range`.
pub fn all_values_in(cards: &[Card], range: std::ops::RangeInclusive<Value>) -> bool {
    cards.iter().all(|card| range.contains(&card.value()))
}

/// Four consecutive ranks sit next to each other in the sorted hand.
pub fn is_open_ended_draw(cards: &[Card]) -> bool {
    sorted_values(cards)
        .windows(4)
        .any(|w| steps_by(w[0], w[1], 1) && steps_by(w[1], w[2], 1) && steps_by(w[2], w[3], 1))
}

/// A gap of two followed by a step of one somewhere in the sorted hand.
///
/// This only inspects the first three ranks of each four-card window, so it
/// is a rough gutshot heuristic rather than a full one-gap straight detector.
pub fn is_inside_draw(cards: &[Card]) -> bool {
    sorted_values(cards)
        .windows(4)
        .any(|w| steps_by(w[0], w[1], 2) && steps_by(w[1], w[2], 1))
}

/// Exactly four cards share a suit.
pub fn is_four_to_flush(cards: &[Card]) -> bool {
    suit_counts(cards).values().any(|&count| count == 4)
}

/// Exactly one pair plus some card whose rank differs from the first
/// card's rank.
pub fn is_drawing_to_set(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    count_pairs(cards) == 1 && cards.iter().any(|card| card.value() != first.value())
}
