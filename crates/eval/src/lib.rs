// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerank hand evaluator.
//!
//! Poker hand evaluator for 2, 3, 4 and 5 cards hands with four scoring
//! variants: standard high hands, high hands where straights and flushes do not
//! count, and ace-to-five low-ball with or without straights and flushes. This
//! evaluator is an extension of [Cactus Kev's][kevlink] poker evaluator.
//!
//! To use the evaluator create a [Hand] and use [evaluate] to get its value,
//! lower values are stronger hands and [HandValue] compares by strength:
//!
//! ```
//! # use pokerank_eval::*;
//! let royal = "AS KS QS JS TS".parse::<Hand>().unwrap();
//! let wheel = "AS 2D 3C 4H 5S".parse::<Hand>().unwrap();
//!
//! let v1 = evaluate(&royal, Variant::HIGH);
//! let v2 = evaluate(&wheel, Variant::HIGH);
//! assert_eq!(v1.value(), 1);
//! assert!(v1 > v2);
//! assert_eq!(classify(v2, 5, Variant::HIGH), HandRank::Straight);
//!
//! // The wheel is the best ace-to-five hand.
//! assert_eq!(evaluate(&wheel, Variant::ACE_TO_FIVE).value(), 1);
//! ```
//!
//! Use [find_best] to get the best hand out of more cards or with wild cards.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub mod eval;
mod hand;
mod search;

pub use error::EvalError;
pub use eval::{
    FIVE_OF_A_KIND_OFFSET, HandRank, HandValue, classify, classify_wild, evaluate, tables,
};
pub use hand::{Hand, Variant};
pub use search::{BestHand, Pick, PoolCard, find_best};

// Reexport cards types.
pub use pokerank_cards::{Card, Deck, PRIMES, Rank, Suit};
