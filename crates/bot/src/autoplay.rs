// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drives the bot seats at a table.
use log::debug;
use tokio::time::{self, Duration};

use mixtable_core::{Action, Result, Table};

use crate::Strategy;

/// Plays the bot seats of a table with a strategy.
///
/// All seats but the human seat are bots, with no human seat every seat is
/// played by the strategy.
#[derive(Debug)]
pub struct Autoplay<S> {
    strategy: S,
    human: Option<usize>,
}

impl<S: Strategy> Autoplay<S> {
    /// Creates a driver for all seats but `human`.
    pub fn new(strategy: S, human: Option<usize>) -> Self {
        Self { strategy, human }
    }

    /// The bot seat that has to act, if any.
    pub fn bot_to_act(&self, table: &Table) -> Option<usize> {
        table.to_act().filter(|&seat| Some(seat) != self.human)
    }

    /// Plays one action if a bot has to act, returns the seat and the action.
    pub fn step(&mut self, table: &mut Table) -> Result<Option<(usize, Action)>> {
        let Some(seat) = self.bot_to_act(table) else {
            return Ok(None);
        };

        let action = self.strategy.choose_action(&table.state(), seat);
        debug!("Bot seat {seat} plays {action}");
        table.act_as(seat, action)?;

        Ok(Some((seat, action)))
    }

    /// Plays bot actions until the human seat has to act or the hand ends,
    /// returns the number of actions played.
    pub fn run(&mut self, table: &mut Table) -> Result<usize> {
        let mut actions = 0;
        while self.step(table)?.is_some() {
            actions += 1;
        }

        Ok(actions)
    }

    /// Like [Autoplay::run] waiting `delay` before each bot action.
    pub async fn run_with_delay(&mut self, table: &mut Table, delay: Duration) -> Result<usize> {
        let mut actions = 0;
        while self.bot_to_act(table).is_some() {
            time::sleep(delay).await;
            if self.step(table)?.is_some() {
                actions += 1;
            }
        }

        Ok(actions)
    }
}
