// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Mixtable Bot table simulation.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use tokio::time::Duration;

use mixtable_bot::{CallingStation, Config, RandomStrategy};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to play.
    #[clap(long, default_value_t = 100)]
    hands: u64,
    /// Number of seats at the table.
    #[clap(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=10))]
    seats: u8,
    /// Random seed for reproducible runs.
    #[clap(long)]
    seed: Option<u64>,
    /// Delay in milliseconds before each bot action.
    #[clap(long, default_value_t = 0)]
    delay_ms: u64,
    /// Only call or check.
    #[clap(long)]
    passive: bool,
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
        delay: Duration::from_millis(cli.delay_ms),
    };

    let res = if cli.passive {
        mixtable_bot::run(config, |_| CallingStation).await
    } else {
        mixtable_bot::run(config, RandomStrategy::with_rng).await
    };

    if let Err(e) = &res {
        error!("Simulation error: {e}");
    }

    res.map(|_| ())
}
