// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand search.
//!
//! Finds the strongest hand of a given size out of a pool of cards that may
//! have more cards than the hand size and wild cards:
//!
//! ```
//! # use pokerank_eval::*;
//! let pool = ["AS", "KD", "7C", "7H", "2S", "KC", "9D"]
//!     .into_iter()
//!     .map(|c| PoolCard::Natural(c.parse().unwrap()))
//!     .collect::<Vec<_>>();
//! let best = find_best(&pool, 5, Variant::HIGH).unwrap();
//! assert_eq!(best.rank, HandRank::TwoPair);
//! ```
use pokerank_cards::for_each_ksubset;

use crate::{
    Card, Deck, EvalError, HandRank, HandValue, Rank, Suit, Variant,
    eval::{FIVE_OF_A_KIND_OFFSET, tables},
    hand::check_size,
};

/// A card in a search pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolCard {
    /// A concrete card.
    Natural(Card),
    /// A wild card that can stand for any card.
    Wild,
}

impl From<Card> for PoolCard {
    fn from(card: Card) -> Self {
        PoolCard::Natural(card)
    }
}

/// A card in the best hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// A concrete card from the pool.
    Natural(Card),
    /// A wild card playing as the given card.
    Wild(Card),
}

impl Pick {
    /// The card this pick plays as.
    pub fn card(&self) -> Card {
        match self {
            Pick::Natural(card) | Pick::Wild(card) => *card,
        }
    }
}

/// The result of a best hand search.
#[derive(Debug, Clone)]
pub struct BestHand {
    /// The hand value.
    ///
    /// For 5 cards high games with wild cards in the pool the value is offset
    /// by [FIVE_OF_A_KIND_OFFSET], see [classify_wild](crate::classify_wild).
    /// Without wild cards it is the value returned by [evaluate](crate::evaluate).
    pub value: HandValue,
    /// The hand category.
    pub rank: HandRank,
    /// The hand cards, natural cards first.
    ///
    /// Five of a kind repeats a suit, so a wild card may play as the same card
    /// as a natural card.
    pub cards: Vec<Pick>,
}

/// Finds the best hand of `hand_size` cards in the pool.
///
/// Wild cards play as any card not already in the candidate hand, with ties
/// the first best hand found is returned, natural cards combinations are
/// visited in colex order of their pool position and wild cards assignments
/// in deck order.
pub fn find_best(
    pool: &[PoolCard],
    hand_size: usize,
    variant: Variant,
) -> Result<BestHand, EvalError> {
    check_size(hand_size)?;

    if pool.is_empty() {
        return Err(EvalError::EmptyPool);
    }

    if pool.len() < hand_size {
        return Err(EvalError::PoolTooSmall {
            size: pool.len(),
            hand_size,
        });
    }

    let mut naturals = Vec::with_capacity(pool.len());
    for card in pool {
        if let PoolCard::Natural(card) = *card {
            if naturals.contains(&card) {
                return Err(EvalError::DuplicateCard(card));
            }
            naturals.push(card);
        }
    }

    let wilds = pool.len() - naturals.len();
    let extended = wilds > 0 && hand_size == 5 && !variant.low_hand_wins;

    if extended {
        if let Some(best) = five_of_a_kind(&naturals, wilds) {
            return Ok(best);
        }
    }

    let tables = tables::get(hand_size).tables(variant);

    // A candidate with one more wild card and one less natural card can play
    // any hand the other can, so only use as many wild cards as possible.
    let used_wilds = wilds.min(hand_size);
    let used_naturals = hand_size - used_wilds;

    let mut best_value = u16::MAX;
    let mut best = [Pick::Natural(Card::default()); 5];
    let mut hand = [Card::default(); 5];

    for_each_ksubset(naturals.len(), used_naturals, |idx| {
        for (pos, &i) in idx.iter().enumerate() {
            hand[pos] = naturals[i];
        }

        if used_wilds == 0 {
            let value = tables.lookup(&hand[..hand_size]);
            if value < best_value {
                best_value = value;
                for (pick, &card) in best.iter_mut().zip(&hand[..hand_size]) {
                    *pick = Pick::Natural(card);
                }
            }
            return;
        }

        let mut deck = Deck::default();
        for &card in &hand[..used_naturals] {
            deck.remove(card);
        }
        let others = deck.cards();

        for_each_ksubset(others.len(), used_wilds, |sub| {
            for (pos, &i) in sub.iter().enumerate() {
                hand[used_naturals + pos] = others[i];
            }

            let value = tables.lookup(&hand[..hand_size]);
            if value < best_value {
                best_value = value;
                for (pos, pick) in best.iter_mut().enumerate().take(hand_size) {
                    *pick = if pos < used_naturals {
                        Pick::Natural(hand[pos])
                    } else {
                        Pick::Wild(hand[pos])
                    };
                }
            }
        });
    });

    let offset = if extended { FIVE_OF_A_KIND_OFFSET } else { 0 };
    Ok(BestHand {
        value: HandValue::new(best_value + offset),
        rank: tables.classify(best_value),
        cards: best[..hand_size].to_vec(),
    })
}

/// Returns the best five of a kind if there are enough wild cards.
fn five_of_a_kind(naturals: &[Card], wilds: usize) -> Option<BestHand> {
    let rank = Rank::ranks()
        .rev()
        .find(|&r| naturals.iter().filter(|c| c.rank() == r).count() + wilds >= 5)?;

    let mut cards = naturals
        .iter()
        .filter(|c| c.rank() == rank)
        .map(|&c| Pick::Natural(c))
        .collect::<Vec<_>>();

    // Wild cards play first as the missing suits and then repeat a suit.
    let missing = Suit::suits()
        .filter(|&s| !naturals.contains(&Card::new(rank, s)))
        .collect::<Vec<_>>();
    let suits = missing.into_iter().chain(std::iter::repeat(Suit::Spades));
    let wild_cards = suits.take(5 - cards.len()).map(|s| Pick::Wild(Card::new(rank, s)));
    cards.extend(wild_cards);

    Some(BestHand {
        value: HandValue::new(Rank::Ace as u16 - rank as u16 + 1),
        rank: HandRank::FiveOfAKind,
        cards,
    })
}
