// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Mixtable CLI client, one player against the bots.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tokio::time::Duration;

use mixtable_bot::{
    Autoplay, RandomStrategy,
    core::{Chips, Table, TableConfig},
};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of seats, the first seat is yours.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=10))]
    seats: u8,
    /// The starting stack for each seat.
    #[clap(long, default_value_t = 1_000, value_parser = clap::value_parser!(u32).range(1..))]
    stack: u32,
    /// The small blind.
    #[clap(long, default_value_t = 5)]
    small_blind: u32,
    /// The big blind, also the raise size.
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    big_blind: u32,
    /// Delay in milliseconds before each bot action.
    #[clap(long, default_value_t = 800, value_parser = clap::value_parser!(u64).range(0..=10_000))]
    delay_ms: u64,
    /// Random seed for reproducible games.
    #[clap(long)]
    seed: Option<u64>,
    /// Log to stderr.
    #[clap(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs would mess up the terminal, redirect stderr to see them.
    if cli.verbose {
        env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .format_target(false)
            .format_timestamp_millis()
            .target(env_logger::Target::Stderr)
            .init();
    }

    let config = TableConfig {
        stack: Chips::new(cli.stack),
        small_blind: Chips::new(cli.small_blind),
        big_blind: Chips::new(cli.big_blind),
        ..TableConfig::with_seats(cli.seats as usize)
    };

    let (table_rng, bot_rng) = match cli.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
    };

    let table = Table::with_rng(config, table_rng)?;
    let autoplay = Autoplay::new(RandomStrategy::with_rng(bot_rng), Some(terminal::HUMAN_SEAT));

    terminal::run(table, autoplay, Duration::from_millis(cli.delay_ms)).await
}
