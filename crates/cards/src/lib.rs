// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerank cards types.
//!
//! This crate define types to create cards, each card is encoded as a 32 bits
//! code that the hand evaluator aggregates with bitwise and multiplicative
//! operations:
//!
//! ```
//! # use pokerank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.prime(), 41);
//! assert_eq!(ah.rank_mask(), 1 << 12);
//! assert_eq!("AH".parse(), Ok(ah));
//! ```
//!
//! and a [Deck] type for sampling and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use pokerank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use pokerank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, PRIMES, Rank, Suit, for_each_ksubset};
