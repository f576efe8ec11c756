// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A simple example bot strategy.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::{Rng, rngs::StdRng};

use mixtable_bot::{
    Config, Strategy,
    core::{Action, Chips, Street, TableState},
};

struct PairRaiser {
    rng: StdRng,
}

impl Strategy for PairRaiser {
    fn choose_action(&mut self, state: &TableState, seat: usize) -> Action {
        // Some randomness.
        let p = self.rng.random::<f64>();

        let player = &state.seats[seat];
        if let Some([c1, c2]) = player.hole {
            // Raise preflop with a pair.
            if c1.rank() == c2.rank() && state.street == Street::Preflop && p > 0.2 {
                return Action::Raise;
            }
        }

        if p < 0.1 && state.to_call(seat) > Chips::ZERO {
            Action::Fold
        } else {
            Action::CallOrCheck
        }
    }
}

#[derive(Debug, Parser)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Number of hands to play.
    #[clap(long, short = 'n', default_value_t = 100)]
    hands: u64,
    /// Number of seats at the table.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=10))]
    seats: u8,
    /// Random seed.
    #[clap(long)]
    seed: Option<u64>,
    /// Help long flag.
    #[clap(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        hands: cli.hands,
        seats: cli.seats as usize,
        seed: cli.seed,
        delay: Default::default(),
    };

    let summary = mixtable_bot::run(config, |rng| PairRaiser { rng }).await?;
    println!("{} hands, {} actions", summary.hands, summary.actions);

    Ok(())
}
