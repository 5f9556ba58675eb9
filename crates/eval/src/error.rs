// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use pokerank_cards::{Card, CardError};

/// Errors returned by the evaluator API.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The number of cards is not a supported hand size.
    #[error("invalid hand size {0}, hands have 2 to 5 cards")]
    InvalidHandSize(usize),
    /// A card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card could not be parsed or decoded.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The best hand search got no cards.
    #[error("empty cards pool")]
    EmptyPool,
    /// The best hand search got fewer cards than the hand size.
    #[error("pool has {size} cards but {hand_size} are needed")]
    PoolTooSmall {
        /// The pool size.
        size: usize,
        /// The requested hand size.
        hand_size: usize,
    },
    /// Persisted tables could not be decoded.
    #[error("tables decoding error: {0}")]
    Decode(#[from] bincode::Error),
    /// Persisted tables were built for a different encoding.
    #[error("incompatible tables: {0}")]
    IncompatibleTables(String),
    /// Tables for this hand size are already in use.
    #[error("tables for {0} cards hands already built")]
    TablesAlreadyBuilt(usize),
    /// A table check found a bad entry.
    #[error("tables check failed for {hand}: {reason}")]
    TableCheck {
        /// The hand that failed.
        hand: String,
        /// What went wrong.
        reason: String,
    },
}
