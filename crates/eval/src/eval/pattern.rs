// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification primitives.
//!
//! These functions work on the card codes and do not check the hand, the caller
//! must pass 2 to 5 distinct cards.
use crate::{Card, Rank};

/// The ace to five straight rank mask in high games.
pub const WHEEL: u16 = 0b1_0000_0000_1111;

/// Bits of the card code with the suit nibble.
const SUIT_MASK: u32 = 0xf000;

/// Checks if all the cards have the same suit.
#[inline]
pub fn is_flush(cards: &[Card]) -> bool {
    cards.iter().fold(u32::MAX, |acc, c| acc & c.code()) & SUIT_MASK != 0
}

/// The 13 bits mask of the ranks in the hand.
#[inline]
pub fn rank_key(cards: &[Card]) -> u16 {
    cards.iter().fold(0, |acc, c| acc | c.rank_mask())
}

/// The product of the cards rank primes.
#[inline]
pub fn hand_product(cards: &[Card]) -> u64 {
    cards.iter().fold(1, |acc, c| acc * c.prime() as u64)
}

/// Checks if no rank repeats.
#[inline]
pub fn has_unique_ranks(cards: &[Card]) -> bool {
    rank_key(cards).count_ones() as usize == cards.len()
}

/// The number of cards for each rank indexed by rank ordinal.
pub fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0; 13];
    for card in cards {
        counts[card.rank_bits() as usize] += 1;
    }

    counts
}

/// Checks the hand ranks multiplicities.
///
/// The `groups` slice lists the sizes of the repeated ranks from largest to
/// smallest, for example `[2]` is one pair, `[2, 2]` two pair, `[3, 2]` a full
/// house, and `[]` only distinct ranks.
pub fn is_count(cards: &[Card], groups: &[u8]) -> bool {
    let (sizes, len) = group_sizes(&rank_counts(cards));
    &sizes[..len] == groups
}

/// Returns the sizes of the repeated ranks in decreasing order.
pub(crate) fn group_sizes(counts: &[u8; 13]) -> ([u8; 13], usize) {
    let mut sizes = *counts;
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    let len = sizes.iter().take_while(|&&n| n > 1).count();
    (sizes, len)
}

/// Moves the ace bit to the bottom of a rank mask so that bit 0 is the ace,
/// bit 1 the deuce, and bit 12 the king.
#[inline]
pub fn ace_low_mask(key: u16) -> u16 {
    ((key << 1) | (key >> 12)) & 0x1fff
}

/// The straight top card value for a hand of `len` distinct ranks.
///
/// In high games the value is the rank ordinal and the wheel plays as a five
/// high straight for 5 cards hands, in low games the ace is below the deuce
/// and the value is the ordinal in the ace low mask.
pub fn straight_top(key: u16, len: usize, ace_low: bool) -> Option<u8> {
    if key.count_ones() as usize != len {
        return None;
    }

    let mask = if ace_low { ace_low_mask(key) } else { key };
    let bottom = mask.trailing_zeros();
    if mask >> bottom == (1 << len) - 1 {
        return Some((bottom as usize + len - 1) as u8);
    }

    if !ace_low && len == 5 && key == WHEEL {
        return Some(Rank::Five as u8);
    }

    None
}

/// Checks if the cards make a straight.
pub fn is_straight(cards: &[Card], ace_low: bool) -> bool {
    straight_top(rank_key(cards), cards.len(), ace_low).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn flush() {
        assert!(is_flush(&cards("AS KS QS JS 9S")));
        assert!(is_flush(&cards("2H 7H")));
        assert!(!is_flush(&cards("AS KS QS JS 9D")));
        assert!(!is_flush(&cards("2C 2D")));
    }

    #[test]
    fn keys() {
        assert_eq!(rank_key(&cards("2C 2D 4H")), 0b101);
        assert_eq!(rank_key(&cards("AS KD")), 0b1_1000_0000_0000);
        assert!(has_unique_ranks(&cards("AS KD 2C")));
        assert!(!has_unique_ranks(&cards("AS KD AC")));

        assert_eq!(hand_product(&cards("2C 2D 4H")), 2 * 2 * 5);
        assert_eq!(hand_product(&cards("AS AD AH AC KS")), 41 * 41 * 41 * 41 * 37);

        // Order does not matter.
        assert_eq!(
            hand_product(&cards("7S 7D 2C 2D 9H")),
            hand_product(&cards("9H 2D 7D 2C 7S"))
        );
    }

    #[test]
    fn counts() {
        assert!(is_count(&cards("AS KS QS JS 9D"), &[]));
        assert!(is_count(&cards("AS AD QS JS 9D"), &[2]));
        assert!(is_count(&cards("AS AD QS QD 9D"), &[2, 2]));
        assert!(is_count(&cards("AS AD AH QD 9D"), &[3]));
        assert!(is_count(&cards("AS AD AH QD QS"), &[3, 2]));
        assert!(is_count(&cards("AS AD AH AC QS"), &[4]));
        assert!(is_count(&cards("5S 5D"), &[2]));
        assert!(is_count(&cards("5S 5D 5C"), &[3]));

        assert!(!is_count(&cards("AS AD AH QD QS"), &[3]));
        assert!(!is_count(&cards("AS AD QS QD 9D"), &[2]));
    }

    #[test]
    fn straights() {
        assert_eq!(straight_top(rank_key(&cards("AS KD QS JS TS")), 5, false), Some(12));
        assert_eq!(straight_top(rank_key(&cards("6S 5D 4S 3S 2S")), 5, false), Some(4));
        assert_eq!(straight_top(WHEEL, 5, false), Some(Rank::Five as u8));
        assert!(!is_straight(&cards("AS KD QS JS 9S"), false));
        assert!(!is_straight(&cards("AS AD KS QS JS"), false));

        // No wheel below 5 cards in high games.
        assert!(!is_straight(&cards("AS 2D 3S 4S"), false));
        assert!(is_straight(&cards("KS QD JS TS"), false));
        assert!(is_straight(&cards("3S 2D 4S"), false));
        assert!(is_straight(&cards("AS KC"), false));
        assert!(!is_straight(&cards("AS 2C"), false));
    }

    #[test]
    fn ace_low_straights() {
        assert_eq!(ace_low_mask(WHEEL), 0b1_1111);
        assert_eq!(straight_top(WHEEL, 5, true), Some(4));
        assert!(is_straight(&cards("AS 2D 3S 4S"), true));
        assert!(is_straight(&cards("AS 2D"), true));
        assert!(is_straight(&cards("KS QD JS TS 9S"), true));

        // The ace does not play high.
        assert!(!is_straight(&cards("AS KD QS JS TS"), true));
        assert!(!is_straight(&cards("AS KD"), true));
    }
}
