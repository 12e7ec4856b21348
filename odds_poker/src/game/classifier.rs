//! Hand classification.

use super::{category::HandCategory, entities::Card, odds::OddsTable};

/// Classify `cards` into the strongest matching category.
///
/// Total over any input; hand size isn't checked, so passing an empty or
/// oddly sized hand gives a well-defined but meaningless answer.
///
/// # Examples
///
/// ```
/// use odds_poker::game::{
///     category::HandCategory,
///     classifier::classify,
///     entities::{Card, Suit},
/// };
///
/// let hand = [
///     Card(10, Suit::Spade),
///     Card(11, Suit::Spade),
///     Card(12, Suit::Spade),
///     Card(13, Suit::Spade),
///     Card(14, Suit::Spade),
/// ];
/// assert_eq!(classify(&hand), HandCategory::RoyalFlush);
/// ```
pub fn classify(cards: &[Card]) -> HandCategory {
    HandCategory::ALL
        .into_iter()
        .find(|category| category.matches(cards))
        .unwrap_or(HandCategory::HighCard)
}

/// Classify and look the result up in the standard odds table.
pub fn classify_with_odds(cards: &[Card]) -> (HandCategory, f64) {
    let category = classify(cards);
    (category, OddsTable::standard().odds_against(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{
        ACE, JACK, KING, QUEEN, TEN,
        Suit::{Club, Diamond, Heart, Spade},
    };

    // === Made hands ===

    #[test]
    fn test_royal_flush() {
        let hand = [
            Card(TEN, Spade),
            Card(JACK, Spade),
            Card(QUEEN, Spade),
            Card(KING, Spade),
            Card(ACE, Spade),
        ];
        assert_eq!(classify(&hand), HandCategory::RoyalFlush);
    }

    #[test]
    fn test_straight_flush() {
        let hand = [
            Card(5, Heart),
            Card(6, Heart),
            Card(7, Heart),
            Card(8, Heart),
            Card(9, Heart),
        ];
        assert_eq!(classify(&hand), HandCategory::StraightFlush);
    }

    #[test]
    fn test_four_of_a_kind() {
        let hand = [
            Card(9, Club),
            Card(9, Diamond),
            Card(9, Heart),
            Card(9, Spade),
            Card(2, Club),
        ];
        assert_eq!(classify(&hand), HandCategory::FourOfAKind);
    }

    #[test]
    fn test_full_house() {
        let hand = [
            Card(KING, Club),
            Card(KING, Diamond),
            Card(KING, Heart),
            Card(4, Spade),
            Card(4, Club),
        ];
        assert_eq!(classify(&hand), HandCategory::FullHouse);
    }

    #[test]
    fn test_flush() {
        let hand = [
            Card(2, Diamond),
            Card(7, Diamond),
            Card(9, Diamond),
            Card(JACK, Diamond),
            Card(KING, Diamond),
        ];
        assert_eq!(classify(&hand), HandCategory::Flush);
    }

    #[test]
    fn test_straight() {
        let hand = [
            Card(4, Club),
            Card(5, Diamond),
            Card(6, Heart),
            Card(7, Spade),
            Card(8, Club),
        ];
        assert_eq!(classify(&hand), HandCategory::Straight);
    }

    #[test]
    fn test_wheel_is_not_a_straight() {
        let hand = [
            Card(ACE, Club),
            Card(2, Diamond),
            Card(3, Heart),
            Card(4, Spade),
            Card(5, Club),
        ];
        assert_ne!(classify(&hand), HandCategory::Straight);
    }

    #[test]
    fn test_three_of_a_kind() {
        let hand = [
            Card(6, Club),
            Card(6, Diamond),
            Card(6, Heart),
            Card(JACK, Spade),
            Card(2, Club),
        ];
        assert_eq!(classify(&hand), HandCategory::ThreeOfAKind);
    }

    #[test]
    fn test_two_pair() {
        let hand = [
            Card(6, Club),
            Card(6, Diamond),
            Card(QUEEN, Heart),
            Card(QUEEN, Spade),
            Card(2, Club),
        ];
        assert_eq!(classify(&hand), HandCategory::TwoPair);
    }

    #[test]
    fn test_one_pair() {
        let hand = [
            Card(2, Club),
            Card(2, Diamond),
            Card(5, Heart),
            Card(9, Spade),
            Card(KING, Diamond),
        ];
        assert_eq!(classify(&hand), HandCategory::OnePair);
    }

    // === Starting hands and draws ===

    #[test]
    fn test_ace_king_offsuit() {
        let five = [
            Card(ACE, Spade),
            Card(KING, Diamond),
            Card(7, Club),
            Card(4, Heart),
            Card(2, Spade),
        ];
        assert_eq!(classify(&five), HandCategory::AceKingOffsuit);
    }

    #[test]
    fn test_two_card_ace_king_is_connected() {
        // King and ace step by one, so the pair is already a straight.
        assert_eq!(
            classify(&[Card(ACE, Spade), Card(KING, Diamond)]),
            HandCategory::Straight
        );
        assert_eq!(
            classify(&[Card(ACE, Heart), Card(KING, Heart)]),
            HandCategory::StraightFlush
        );
    }

    #[test]
    fn test_suited_two_cards_are_a_flush() {
        // Two suited cards already satisfy the all-one-suit check.
        assert_eq!(
            classify(&[Card(ACE, Heart), Card(QUEEN, Heart)]),
            HandCategory::Flush
        );
    }

    #[test]
    fn test_connected_two_cards_are_a_straight() {
        assert_eq!(
            classify(&[Card(8, Heart), Card(9, Club)]),
            HandCategory::Straight
        );
    }

    #[test]
    fn test_pocket_pair_is_one_pair() {
        assert_eq!(
            classify(&[Card(ACE, Heart), Card(ACE, Club)]),
            HandCategory::OnePair
        );
    }

    #[test]
    fn test_unconnected_unsuited() {
        assert_eq!(
            classify(&[Card(7, Heart), Card(2, Club)]),
            HandCategory::UnconnectedUnsuited
        );
        let five = [
            Card(2, Club),
            Card(3, Diamond),
            Card(4, Heart),
            Card(5, Spade),
            Card(9, Club),
        ];
        assert_eq!(classify(&five), HandCategory::UnconnectedUnsuited);
    }

    #[test]
    fn test_open_ended_straight_draw() {
        let hand = [
            Card(5, Club),
            Card(6, Diamond),
            Card(7, Heart),
            Card(8, Spade),
            Card(KING, Club),
        ];
        assert_eq!(classify(&hand), HandCategory::OpenEndedStraightDraw);
    }

    #[test]
    fn test_four_to_a_flush() {
        let hand = [
            Card(2, Heart),
            Card(5, Heart),
            Card(9, Heart),
            Card(KING, Heart),
            Card(3, Spade),
        ];
        assert_eq!(classify(&hand), HandCategory::FourToAFlush);
    }

    #[test]
    fn test_inside_straight_draw() {
        let hand = [
            Card(3, Club),
            Card(9, Diamond),
            Card(JACK, Heart),
            Card(QUEEN, Spade),
            Card(KING, Club),
        ];
        assert_eq!(classify(&hand), HandCategory::InsideStraightDraw);
    }

    #[test]
    fn test_overcards() {
        assert_eq!(
            classify(&[Card(ACE, Heart), Card(QUEEN, Club)]),
            HandCategory::Overcards
        );
    }

    #[test]
    fn test_high_card_fallback() {
        assert_eq!(
            classify(&[Card(ACE, Heart), Card(5, Club)]),
            HandCategory::HighCard
        );
        assert_eq!(
            classify(&[Card(JACK, Heart), Card(ACE, Club)]),
            HandCategory::HighCard
        );
    }

    // === Precedence ===

    #[test]
    fn test_overlapping_predicates_resolve_to_stronger() {
        // Suited ace-king that is also a pair: AceKingSuited and PocketAces
        // both hold, but a single suit is claimed as a flush long before.
        let hand = [Card(ACE, Spade), Card(ACE, Spade), Card(KING, Spade)];
        assert!(HandCategory::AceKingSuited.matches(&hand));
        assert!(HandCategory::PocketAces.matches(&hand));
        assert_eq!(classify(&hand), HandCategory::Flush);

        let offsuit = [Card(ACE, Spade), Card(ACE, Heart), Card(KING, Club)];
        assert!(HandCategory::PocketAces.matches(&offsuit));
        assert_eq!(classify(&offsuit), HandCategory::OnePair);
    }

    #[test]
    fn test_classify_returns_first_match() {
        let hand = [
            Card(3, Club),
            Card(9, Diamond),
            Card(JACK, Heart),
            Card(QUEEN, Spade),
            Card(KING, Club),
        ];
        let category = classify(&hand);
        assert_eq!(category, HandCategory::InsideStraightDraw);
        for earlier in &HandCategory::ALL[..category.precedence()] {
            assert!(!earlier.matches(&hand), "{earlier:?} should not match");
        }
    }

    #[test]
    fn test_any_ace_king_is_claimed_before_queen_or_better() {
        // Queen-or-better needs A, K and Q present, so AK always fires first.
        let hand = [
            Card(QUEEN, Club),
            Card(KING, Diamond),
            Card(ACE, Heart),
            Card(3, Spade),
            Card(7, Club),
        ];
        assert!(HandCategory::QueenOrBetter.matches(&hand));
        assert_eq!(classify(&hand), HandCategory::AceKingOffsuit);
    }

    #[test]
    fn test_deserialized_out_of_range_ranks_classify() {
        let hand: Vec<Card> = serde_json::from_str(r#"[[255,"Club"],[255,"Heart"]]"#).unwrap();
        assert_eq!(classify(&hand), HandCategory::OnePair);
    }

    #[test]
    fn test_classify_with_odds() {
        let (category, odds) = classify_with_odds(&[Card(7, Heart), Card(2, Club)]);
        assert_eq!(category, HandCategory::UnconnectedUnsuited);
        assert_eq!(odds, 0.873);
    }
}
