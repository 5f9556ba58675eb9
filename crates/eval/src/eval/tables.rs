// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables generation and storage.
//!
//! The tables for a hand size are generated by enumerating all the hands of
//! that size, ordering the distinct hands for each variant, and scattering
//! their dense ranks into:
//!
//! - a flush array indexed by the 13 bits rank mask for hands of a single suit,
//! - a unique array indexed by the rank mask for other hands with no repeated
//!   ranks,
//! - a product map keyed by the product of the rank primes for all other hands.
//!
//! Tables are built on first use, to skip generation at startup they can be
//! built with the `pokerank-gen` tool and installed from the saved blob:
//!
//! ```no_run
//! # fn load() -> anyhow::Result<()> {
//! use pokerank_eval::tables::{self, TableSet};
//!
//! let bytes = std::fs::read("tables5.bin")?;
//! tables::install(TableSet::from_bytes(&bytes)?)?;
//! # Ok(())
//! # }
//! ```
use ahash::AHashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::OnceLock, time::Instant};

use super::{
    ordering::{HandRank, HandShape},
    pattern,
};
use crate::{Card, Deck, EvalError, Hand, PRIMES, Variant};

/// The number of entries in the arrays indexed by a rank mask.
const RANK_KEYS: usize = 1 << 13;

/// Persisted tables format version.
const FORMAT_VERSION: u32 = 1;

/// The tables for each hand size.
static TABLES: [OnceLock<TableSet>; 4] = [const { OnceLock::new() }; 4];

/// Returns the tables for a hand size, building them if needed.
///
/// Concurrent callers wait for the first one to finish building.
///
/// Panics if hand size is not 2 <= hand_size <= 5.
pub fn get(hand_size: usize) -> &'static TableSet {
    build_once(&TABLES[slot(hand_size)], hand_size)
}

fn build_once(lock: &OnceLock<TableSet>, hand_size: usize) -> &TableSet {
    lock.get_or_init(|| TableSet::generate(hand_size))
}

/// Installs pre-built tables.
///
/// Fails if the tables for the same hand size have already been built.
pub fn install(set: TableSet) -> Result<(), EvalError> {
    TABLES[slot(set.hand_size)]
        .set(set)
        .map_err(|set| EvalError::TablesAlreadyBuilt(set.hand_size))
}

fn slot(hand_size: usize) -> usize {
    assert!(
        (Hand::MIN_SIZE..=Hand::MAX_SIZE).contains(&hand_size),
        "2 <= hand_size <= 5"
    );
    hand_size - Hand::MIN_SIZE
}

/// The lookup path for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum LookupKey {
    Flush(u16),
    Unique(u16),
    Product(u64),
}

impl LookupKey {
    #[inline]
    fn new(cards: &[Card]) -> Self {
        let key = pattern::rank_key(cards);
        if pattern::is_flush(cards) {
            LookupKey::Flush(key)
        } else if pattern::has_unique_ranks(cards) {
            LookupKey::Unique(key)
        } else {
            LookupKey::Product(pattern::hand_product(cards))
        }
    }
}

/// The lookup tables for one hand size and variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tables {
    flush: Vec<u16>,
    unique: Vec<u16>,
    products: AHashMap<u64, u16>,
    /// The smallest value of each category, in increasing value order.
    boundaries: Vec<(u16, HandRank)>,
    classes: u16,
}

impl Tables {
    /// Builds the tables for a variant given the distinct hands.
    fn build(hand_size: usize, variant: Variant, shapes: &AHashMap<LookupKey, [Card; 5]>) -> Self {
        // Equal strength hands share the same entry.
        let mut ordered = BTreeMap::<u32, (HandRank, Vec<LookupKey>)>::new();
        for (key, cards) in shapes {
            let shape = HandShape::new(&cards[..hand_size]);
            ordered
                .entry(shape.strength(variant))
                .or_insert_with(|| (shape.category(variant), Vec::new()))
                .1
                .push(*key);
        }

        let mut tables = Tables {
            flush: vec![0; RANK_KEYS],
            unique: vec![0; RANK_KEYS],
            products: AHashMap::default(),
            boundaries: Vec::new(),
            classes: ordered.len() as u16,
        };

        for (value, (category, keys)) in (1..).zip(ordered.values()) {
            if tables.boundaries.last().is_none_or(|(_, c)| c != category) {
                tables.boundaries.push((value, *category));
            }

            for key in keys {
                match *key {
                    LookupKey::Flush(k) => tables.flush[k as usize] = value,
                    LookupKey::Unique(k) => tables.unique[k as usize] = value,
                    LookupKey::Product(p) => {
                        tables.products.insert(p, value);
                    }
                }
            }
        }

        debug_assert!(
            shapes
                .values()
                .all(|cards| tables.try_lookup(&cards[..hand_size]).is_some()),
            "incomplete {hand_size} cards tables"
        );

        tables
    }

    /// Returns the value of a hand, 1 is the strongest hand.
    ///
    /// Panics if the hand is not in the tables, that can only happen for cards
    /// that are not a valid hand or for corrupted tables.
    #[inline]
    pub fn lookup(&self, cards: &[Card]) -> u16 {
        match self.try_lookup(cards) {
            Some(value) => value,
            None => panic!(
                "Missing {} cards hand {:?} product {}",
                cards.len(),
                cards,
                pattern::hand_product(cards)
            ),
        }
    }

    /// Returns the value of a hand.
    #[inline]
    pub fn try_lookup(&self, cards: &[Card]) -> Option<u16> {
        let value = match LookupKey::new(cards) {
            LookupKey::Flush(k) => self.flush[k as usize],
            LookupKey::Unique(k) => self.unique[k as usize],
            LookupKey::Product(p) => self.products.get(&p).copied().unwrap_or_default(),
        };

        (value != 0).then_some(value)
    }

    /// The category of a value returned by [Tables::lookup].
    pub fn classify(&self, value: u16) -> HandRank {
        let idx = self.boundaries.partition_point(|&(min, _)| min <= value);
        self.boundaries[idx.saturating_sub(1)].1
    }

    /// The smallest value of each category from the strongest category.
    pub fn boundaries(&self) -> &[(u16, HandRank)] {
        &self.boundaries
    }

    /// The number of distinct hand values.
    pub fn classes(&self) -> u16 {
        self.classes
    }
}

/// The tables for a hand size and all the variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSet {
    version: u32,
    primes: [u32; 13],
    hand_size: usize,
    tables: Vec<Tables>,
}

impl TableSet {
    /// Generates the tables for a hand size.
    ///
    /// Panics if hand size is not 2 <= hand_size <= 5.
    pub fn generate(hand_size: usize) -> Self {
        slot(hand_size);

        let now = Instant::now();

        // Hands with the same lookup key have the same strength in all variants.
        let mut combinations = 0usize;
        let mut shapes = AHashMap::<LookupKey, [Card; 5]>::default();
        Deck::default().for_each(hand_size, |cards| {
            combinations += 1;
            shapes.entry(LookupKey::new(cards)).or_insert_with(|| {
                let mut hand = [Card::default(); 5];
                hand[..hand_size].copy_from_slice(cards);
                hand
            });
        });

        let tables = Variant::ALL
            .iter()
            .map(|&variant| Tables::build(hand_size, variant, &shapes))
            .collect::<Vec<_>>();

        for (variant, t) in Variant::ALL.iter().zip(&tables) {
            debug!(
                "{hand_size} cards {variant:?}: {} classes, boundaries {:?}",
                t.classes, t.boundaries
            );
        }

        info!(
            "Built {hand_size} cards tables: {combinations} hands, {} distinct, {:.3}s",
            shapes.len(),
            now.elapsed().as_secs_f64()
        );

        Self {
            version: FORMAT_VERSION,
            primes: PRIMES,
            hand_size,
            tables,
        }
    }

    /// The hand size for these tables.
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// The tables for a variant.
    pub fn tables(&self, variant: Variant) -> &Tables {
        &self.tables[variant.index()]
    }

    /// Checks all the hands have a value with the expected category and
    /// returns the number of hands checked.
    pub fn verify(&self) -> Result<usize, EvalError> {
        let mut checked = 0;
        let mut res = Ok(());

        Deck::default().for_each(self.hand_size, |cards| {
            if res.is_err() {
                return;
            }

            checked += 1;
            let shape = HandShape::new(cards);
            for variant in Variant::ALL {
                let tables = self.tables(variant);
                let reason = match tables.try_lookup(cards) {
                    None => Some("missing entry".to_string()),
                    Some(value) if value > tables.classes => {
                        Some(format!("value {value} out of range"))
                    }
                    Some(value) if tables.classify(value) != shape.category(variant) => {
                        Some(format!(
                            "{variant:?} category {:?} expected {:?}",
                            tables.classify(value),
                            shape.category(variant)
                        ))
                    }
                    Some(_) => None,
                };

                if let Some(reason) = reason {
                    res = Err(EvalError::TableCheck {
                        hand: format!("{cards:?}"),
                        reason,
                    });
                    return;
                }
            }
        });

        res.map(|_| checked)
    }

    /// Serializes the tables.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EvalError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserializes tables checking they match this cards encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EvalError> {
        let set = bincode::deserialize::<TableSet>(bytes)?;

        if set.version != FORMAT_VERSION {
            return Err(EvalError::IncompatibleTables(format!(
                "format version {} expected {FORMAT_VERSION}",
                set.version
            )));
        }

        if set.primes != PRIMES {
            return Err(EvalError::IncompatibleTables(
                "different rank primes".to_string(),
            ));
        }

        if !(Hand::MIN_SIZE..=Hand::MAX_SIZE).contains(&set.hand_size) {
            return Err(EvalError::InvalidHandSize(set.hand_size));
        }

        let well_formed = set.tables.len() == Variant::ALL.len()
            && set.tables.iter().all(|t| {
                t.flush.len() == RANK_KEYS && t.unique.len() == RANK_KEYS && !t.boundaries.is_empty()
            });
        if !well_formed {
            return Err(EvalError::IncompatibleTables(
                "malformed tables".to_string(),
            ));
        }

        Ok(set)
    }
}
