// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and variants ordering.
use serde::{Deserialize, Serialize};

use super::pattern;
use crate::{Card, Variant};

/// A hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Five of a kind, only with wild cards.
    FiveOfAKind,
}

/// Categories from strongest to weakest in high games, low games use the
/// reverse order.
const HIGH_ORDER: [HandRank; 9] = [
    HandRank::StraightFlush,
    HandRank::FourOfAKind,
    HandRank::FullHouse,
    HandRank::Flush,
    HandRank::Straight,
    HandRank::ThreeOfAKind,
    HandRank::TwoPair,
    HandRank::OnePair,
    HandRank::HighCard,
];

/// Suit independent description of a hand used to rank it.
#[derive(Debug, Clone)]
pub struct HandShape {
    counts: [u8; 13],
    key: u16,
    len: usize,
    flush: bool,
}

impl HandShape {
    /// Creates the shape of a hand of 2 to 5 distinct cards.
    pub fn new(cards: &[Card]) -> Self {
        Self {
            counts: pattern::rank_counts(cards),
            key: pattern::rank_key(cards),
            len: cards.len(),
            flush: pattern::is_flush(cards),
        }
    }

    /// The hand category for a variant.
    pub fn category(&self, variant: Variant) -> HandRank {
        let (sizes, len) = pattern::group_sizes(&self.counts);
        match &sizes[..len] {
            [] => {
                let scored = variant.straights_and_flushes;
                let straight = scored && self.straight_top(variant).is_some();
                match (straight, scored && self.flush) {
                    (true, true) => HandRank::StraightFlush,
                    (false, true) => HandRank::Flush,
                    (true, false) => HandRank::Straight,
                    (false, false) => HandRank::HighCard,
                }
            }
            [2] => HandRank::OnePair,
            [2, 2] => HandRank::TwoPair,
            [3] => HandRank::ThreeOfAKind,
            [3, 2] => HandRank::FullHouse,
            _ => HandRank::FourOfAKind,
        }
    }

    /// The ordering key for a variant, a smaller key is a stronger hand and
    /// hands with equal keys have the same strength.
    ///
    /// ```text
    ///   +--------+--------+--------+
    ///   |xxxxxxxx|cccckkkk|kkkk....|
    ///   +--------+--------+--------+
    ///   c = position of the category in the variant order
    ///   k = up to five 4 bits kickers, most significant first
    /// ```
    pub fn strength(&self, variant: Variant) -> u32 {
        let category = self.category(variant);
        let low = variant.low_hand_wins;

        let mut order = HIGH_ORDER
            .iter()
            .position(|&r| r == category)
            .unwrap_or_default();
        if low {
            order = HIGH_ORDER.len() - 1 - order;
        }

        // One entry per rank present, largest groups first and then by rank.
        let mut groups = [(0u8, 0u8); 5];
        let mut len = 0;
        for (ordinal, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                groups[len] = (count, card_value(ordinal as u8, low));
                len += 1;
            }
        }
        groups[..len].sort_unstable_by(|a, b| b.cmp(a));

        if matches!(category, HandRank::Straight | HandRank::StraightFlush) {
            // Straights only compare by their top card.
            groups[0].1 = self.straight_top(variant).unwrap_or_default();
            len = 1;
        }

        let mut key = (order as u32) << 20;
        for (idx, &(_, value)) in groups[..len].iter().enumerate() {
            let kicker = if low { value } else { 12 - value };
            key |= (kicker as u32) << (16 - 4 * idx);
        }

        key
    }

    fn straight_top(&self, variant: Variant) -> Option<u8> {
        pattern::straight_top(self.key, self.len, variant.low_hand_wins)
    }
}

/// The comparison value of a rank, aces are zero in low games.
fn card_value(ordinal: u8, ace_low: bool) -> u8 {
    if ace_low { (ordinal + 1) % 13 } else { ordinal }
}
