// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Mixtable Bot.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use log::{info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tokio::{
    signal,
    time::{Duration, Instant},
};

use mixtable_core::{Error, Table, TableConfig};

pub use mixtable_core as core;

mod autoplay;
pub use autoplay::Autoplay;

mod strategy;
pub use strategy::{CallingStation, RandomStrategy, Strategy};

/// Bots simulation configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of hands to play.
    pub hands: u64,
    /// Number of seats at the table.
    pub seats: usize,
    /// Random seed, seeded from the OS if not set.
    pub seed: Option<u64>,
    /// Delay before each bot action.
    pub delay: Duration,
}

static NICKNAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Mike",
];

/// Summary of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of hands played.
    pub hands: u64,
    /// Number of bot actions.
    pub actions: usize,
}

/// Runs a table where all seats are bots created by the strategy factory,
/// stops after the configured hands, when fewer than two seats have chips or
/// on Ctrl-c.
pub async fn run<F, S>(config: Config, factory: F) -> Result<Summary>
where
    F: Fn(StdRng) -> S,
    S: Strategy,
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let table_config = TableConfig {
        names: NICKNAMES
            .iter()
            .cycle()
            .take(config.seats)
            .map(|n| n.to_string())
            .collect(),
        ..TableConfig::default()
    };

    let mut table = Table::with_rng(table_config, StdRng::seed_from_u64(rng.random()))?;
    let mut autoplay = Autoplay::new(factory(StdRng::seed_from_u64(rng.random())), None);
    let mut summary = Summary {
        hands: 0,
        actions: 0,
    };

    let start = Instant::now();

    tokio::select! {
        res = play(&mut table, &mut autoplay, &config, &mut summary) => res?,
        _ = signal::ctrl_c() => info!("Received Ctrl-c signal"),
    }

    info!(
        "Played {} hands {} actions in {:.2}s",
        summary.hands,
        summary.actions,
        start.elapsed().as_secs_f64()
    );

    for seat in table.state().seats {
        info!("{:>6} {:>8}", seat.name, seat.stack);
    }

    Ok(summary)
}

async fn play<S: Strategy>(
    table: &mut Table,
    autoplay: &mut Autoplay<S>,
    config: &Config,
    summary: &mut Summary,
) -> Result<()> {
    while summary.hands < config.hands {
        match table.start_hand() {
            Ok(()) => {}
            Err(Error::StartupUnavailable(msg)) => {
                warn!("Stopping after {} hands: {msg}", summary.hands);
                break;
            }
            Err(e) => return Err(e.into()),
        }

        summary.actions += autoplay.run_with_delay(table, config.delay).await?;
        summary.hands += 1;

        // Give the Ctrl-c handler a chance to run.
        tokio::task::yield_now().await;
    }

    Ok(())
}
