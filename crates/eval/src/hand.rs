// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands and scoring variants.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, EvalError};

/// A scoring variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    /// Straights and flushes are hand categories.
    pub straights_and_flushes: bool,
    /// Ace-to-five low-ball, the lowest hand wins and aces are low.
    pub low_hand_wins: bool,
}

impl Variant {
    /// Standard high hands.
    pub const HIGH: Variant = Variant {
        straights_and_flushes: true,
        low_hand_wins: false,
    };

    /// High hands where straights and flushes do not count.
    pub const HIGH_NO_STRAIGHTS: Variant = Variant {
        straights_and_flushes: false,
        low_hand_wins: false,
    };

    /// Ace-to-five low-ball, straights and flushes do not count.
    pub const ACE_TO_FIVE: Variant = Variant {
        straights_and_flushes: false,
        low_hand_wins: true,
    };

    /// Ace-to-five low-ball where straights and flushes count against the hand.
    pub const ACE_TO_FIVE_STRAIGHTS: Variant = Variant {
        straights_and_flushes: true,
        low_hand_wins: true,
    };

    /// All the variants.
    pub const ALL: [Variant; 4] = [
        Self::HIGH,
        Self::HIGH_NO_STRAIGHTS,
        Self::ACE_TO_FIVE,
        Self::ACE_TO_FIVE_STRAIGHTS,
    ];

    /// The position of this variant in [Variant::ALL].
    pub(crate) fn index(self) -> usize {
        match (self.low_hand_wins, self.straights_and_flushes) {
            (false, true) => 0,
            (false, false) => 1,
            (true, false) => 2,
            (true, true) => 3,
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::HIGH
    }
}

/// A hand of 2 to 5 distinct cards.
#[derive(Clone, Copy)]
pub struct Hand {
    cards: [Card; Hand::MAX_SIZE],
    len: usize,
}

impl Hand {
    /// The smallest hand size.
    pub const MIN_SIZE: usize = 2;

    /// The largest hand size.
    pub const MAX_SIZE: usize = 5;

    /// Creates a hand checking the number of cards and that no card repeats.
    pub fn new(cards: &[Card]) -> Result<Self, EvalError> {
        check_size(cards.len())?;

        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(EvalError::DuplicateCard(*card));
            }
        }

        let mut hand = Hand {
            cards: [Card::default(); Hand::MAX_SIZE],
            len: cards.len(),
        };
        hand.cards[..cards.len()].copy_from_slice(cards);
        Ok(hand)
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.len]
    }

    /// The number of cards in this hand.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }
}

/// Checks a hand size is supported.
pub(crate) fn check_size(size: usize) -> Result<(), EvalError> {
    if (Hand::MIN_SIZE..=Hand::MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(EvalError::InvalidHandSize(size))
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl FromStr for Hand {
    type Err = EvalError;

    /// Parses space separated cards like `"AS KS QS JS TS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}
