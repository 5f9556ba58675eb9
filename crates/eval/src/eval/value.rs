// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use super::{ordering::HandRank, tables};
use crate::{Card, Hand, Variant};

/// The number of five of a kind values that come before any other 5 cards
/// value in high games with wild cards.
pub const FIVE_OF_A_KIND_OFFSET: u16 = 13;

/// The value of a hand in a variant.
///
/// The [value](HandValue::value) is a dense rank where 1 is the strongest hand
/// for the hand size and variant, hands with the same strength have the same
/// value. Comparison operators compare strength so a stronger hand is greater
/// than a weaker one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue(u16);

impl HandValue {
    pub(crate) fn new(value: u16) -> Self {
        Self(value)
    }

    /// The dense rank for this value, lower is stronger.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl fmt::Debug for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandValue({})", self.0)
    }
}

/// Evaluates a hand.
pub fn evaluate(hand: &Hand, variant: Variant) -> HandValue {
    eval_cards(hand.cards(), variant)
}

/// Evaluates 2 to 5 distinct cards.
#[inline]
pub(crate) fn eval_cards(cards: &[Card], variant: Variant) -> HandValue {
    HandValue(tables::get(cards.len()).tables(variant).lookup(cards))
}

/// Returns the category for the value of a hand of the given size.
///
/// Panics if hand size is not 2 <= hand_size <= 5.
pub fn classify(value: HandValue, hand_size: usize, variant: Variant) -> HandRank {
    tables::get(hand_size).tables(variant).classify(value.0)
}

/// Returns the category of a 5 cards value from a wild cards search.
///
/// In high games the first [FIVE_OF_A_KIND_OFFSET] values are five of a kind
/// hands and the other values are offset by the same amount, low games values
/// have no offset as five of a kind is never the best low hand.
pub fn classify_wild(value: HandValue, variant: Variant) -> HandRank {
    if variant.low_hand_wins {
        classify(value, 5, variant)
    } else if value.0 <= FIVE_OF_A_KIND_OFFSET {
        HandRank::FiveOfAKind
    } else {
        classify(HandValue(value.0 - FIVE_OF_A_KIND_OFFSET), 5, variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, eval::ordering::HandShape};
    use rand::prelude::*;

    fn eval(s: &str, variant: Variant) -> HandValue {
        evaluate(&s.parse::<Hand>().unwrap(), variant)
    }

    fn rank(s: &str, variant: Variant) -> HandRank {
        let hand = s.parse::<Hand>().unwrap();
        classify(evaluate(&hand, variant), hand.len(), variant)
    }

    #[test]
    fn royal_flush() {
        let v = eval("AS KS QS JS TS", Variant::HIGH);
        assert_eq!(v.value(), 1);
        assert_eq!(rank("AS KS QS JS TS", Variant::HIGH), HandRank::StraightFlush);
    }

    #[test]
    fn high_examples() {
        let v = Variant::HIGH;
        assert_eq!(rank("2C 2D 2H 3S 4S", v), HandRank::ThreeOfAKind);
        assert_eq!(rank("AS 2D 3C 4H 5S", v), HandRank::Straight);
        assert_eq!(rank("7S 7D 2C 2D 9H", v), HandRank::TwoPair);

        // The wheel is the weakest straight.
        let wheel = eval("AS 2D 3C 4H 5S", v);
        assert_eq!(wheel.value(), 1609);
        assert!(eval("KS QD JC TH 9S", v) > wheel);
        assert!(wheel > eval("AS KD QC JH 9S", v));
        assert!(wheel > eval("AS AD AC KH QS", v));

        // Swapping the pairs suits.
        assert_eq!(eval("7S 7D 2C 2D 9H", v), eval("7C 7H 2S 2H 9H", v));
    }

    #[test]
    fn flush_beats_same_ranks() {
        let v = Variant::HIGH;
        for (suited, offsuit) in [
            ("AS JS 8S 4S 2S", "AS JD 8S 4S 2S"),
            ("9H 8H 7H 6H 5H", "9H 8C 7H 6H 5H"),
            ("KD 7D", "KD 7C"),
        ] {
            assert!(eval(suited, v) > eval(offsuit, v));
            assert_ne!(rank(suited, v), rank(offsuit, v));
        }

        // Suits do not matter without straights and flushes.
        let v = Variant::HIGH_NO_STRAIGHTS;
        assert_eq!(eval("AS JS 8S 4S 2S", v), eval("AS JD 8S 4S 2S", v));
        assert_eq!(rank("9H 8H 7H 6H 5H", v), HandRank::HighCard);
    }

    #[test]
    fn low_examples() {
        let v = Variant::ACE_TO_FIVE;
        assert_eq!(eval("5S 4D 3C 2H AS", v).value(), 1);
        assert_eq!(eval("5S 4S 3S 2S AS", v).value(), 1);
        assert_eq!(eval("6S 4D 3C 2H AS", v).value(), 2);
        assert!(eval("KS QD JC 9H 8S", v) > eval("AS AD 2C 3H 4S", v));
        assert_eq!(rank("AS AD 2C 3H 4S", v), HandRank::OnePair);

        let v = Variant::ACE_TO_FIVE_STRAIGHTS;
        assert_eq!(eval("6S 4D 3C 2H AS", v).value(), 1);
        assert_eq!(rank("5S 4D 3C 2H AS", v), HandRank::Straight);
        assert_eq!(rank("AS KD QC JH TS", v), HandRank::HighCard);
        assert_eq!(rank("AS 2S 3S 4S 5S", v), HandRank::StraightFlush);
        assert_eq!(eval("KS QS JS TS 9S", v).value(), 7462);

        // Small hands.
        assert!(eval("AS 2D", v) > eval("2S 3D", v));
        assert_eq!(rank("AS 2D", v), HandRank::Straight);
        assert_eq!(eval("AS 3D", v).value(), 1);
        assert_eq!(eval("AS 2D 4C", Variant::ACE_TO_FIVE).value(), 2);
    }

    #[test]
    fn deterministic() {
        let hand = "TS TD 4C 4H 4S".parse::<Hand>().unwrap();
        for variant in Variant::ALL {
            assert_eq!(evaluate(&hand, variant), evaluate(&hand, variant));
        }
    }

    #[test]
    fn ordering_consistency() {
        let mut rng = StdRng::seed_from_u64(13);
        let deck = Deck::default();

        for hand_size in 2..=5 {
            let mut hands = Vec::new();
            deck.sample(&mut rng, 2_000, hand_size, |cards| {
                hands.push(Hand::new(cards).unwrap());
            });

            for variant in Variant::ALL {
                for pair in hands.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    let by_value = evaluate(&b, variant).cmp(&evaluate(&a, variant));
                    let by_strength = HandShape::new(a.cards())
                        .strength(variant)
                        .cmp(&HandShape::new(b.cards()).strength(variant));
                    assert_eq!(by_value, by_strength, "{a} {b} {variant:?}");
                }
            }
        }
    }

    #[test]
    fn categories_match_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        for hand_size in 2..=5 {
            Deck::default().sample(&mut rng, 5_000, hand_size, |cards| {
                let hand = Hand::new(cards).unwrap();
                for variant in Variant::ALL {
                    let value = evaluate(&hand, variant);
                    assert_eq!(
                        classify(value, hand_size, variant),
                        HandShape::new(cards).category(variant),
                        "{hand} {variant:?}"
                    );
                }
            });
        }
    }

    #[test]
    fn wild_classify() {
        let v = Variant::HIGH;
        assert_eq!(classify_wild(HandValue(1), v), HandRank::FiveOfAKind);
        assert_eq!(classify_wild(HandValue(13), v), HandRank::FiveOfAKind);
        assert_eq!(classify_wild(HandValue(14), v), HandRank::StraightFlush);
        assert_eq!(classify_wild(HandValue(7475), v), HandRank::HighCard);

        let v = Variant::ACE_TO_FIVE;
        assert_eq!(classify_wild(HandValue(1), v), HandRank::HighCard);
    }
}
