// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_sample7 -- --hands 1000000
// ```
//
// Expected frequencies for 7 cards hands are close to:
//
// ```text
// High Card:       17.4%
// One  Pair:       43.8%
// Two Pairs:       23.5%
// Three of a Kind: 4.83%
// Straight:        4.62%
// Flush:           3.03%
// Full House:      2.60%
// Four of a Kind:  0.168%
// Straight Flush:  0.0311%
// ```
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use mixtable_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of random hands to evaluate.
    #[clap(long, default_value_t = 1_000_000)]
    hands: usize,
    /// Seed for the random generator.
    #[clap(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), EvalError> {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let now = Instant::now();
    let mut counts = [0usize; 9];

    for _ in 0..cli.hands {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hand = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();
        let rank = HandValue::eval(&hand)?.rank();
        counts[rank as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>().max(1);
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    let ranks = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
    ];

    for rank in ranks {
        let pct = counts[rank as usize] as f64 * 100.0 / total as f64;
        println!("{:<17}{pct:.4}%", format!("{}:", rank.label()));
    }

    Ok(())
}
