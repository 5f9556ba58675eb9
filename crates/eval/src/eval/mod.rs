// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator extends the [Cactus Kev's][kevlink] poker evaluator to 2, 3,
//! 4, and 5 cards hands and to four scoring variants. A hand value is found
//! with at most one lookup in one of three tables:
//!
//! 1. flush hands by the mask of their ranks,
//! 2. hands with no repeated ranks by the mask of their ranks,
//! 3. all other hands by the product of their rank primes.
//!
//! The tables are generated on first use by enumerating all the hands for a
//! hand size, see the [tables] module.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
pub mod ordering;
pub mod pattern;
pub mod tables;
mod value;

pub use ordering::{HandRank, HandShape};
pub use value::{FIVE_OF_A_KIND_OFFSET, HandValue, classify, classify_wild, evaluate};
