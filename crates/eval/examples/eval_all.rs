// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all -- --size 5
// ...
// Total hands      2598960
// ...
//
// High Card:       1302540
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```
use clap::Parser;
use std::time::Instant;

use pokerank_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The hand size.
    #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=5))]
    size: u8,
    /// Use ace-to-five low-ball scoring.
    #[clap(long)]
    low: bool,
    /// Straights and flushes do not count.
    #[clap(long)]
    no_straights: bool,
}

fn main() {
    let cli = Cli::parse();
    let size = cli.size as usize;
    let variant = Variant {
        straights_and_flushes: !cli.no_straights,
        low_hand_wins: cli.low,
    };

    // Build the tables before timing.
    tables::get(size);

    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(size, |cards| {
        let hand = Hand::new(cards).expect("deck hands are valid");
        let rank = classify(evaluate(&hand, variant), size, variant);
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
