// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table configuration.
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    poker::Chips,
};

/// Table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// The seats names, one per seat.
    pub names: Vec<String>,
    /// The starting stack for each seat.
    pub stack: Chips,
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind, also the fixed raise size.
    pub big_blind: Chips,
}

impl TableConfig {
    /// Minimum number of seats.
    pub const MIN_SEATS: usize = 2;
    /// Maximum number of seats, enough cards for everyone and the board.
    pub const MAX_SEATS: usize = 10;

    /// Creates a configuration with the given number of seats, the first seat
    /// is the local player and the others are bots.
    pub fn with_seats(seats: usize) -> Self {
        let names = (0..seats)
            .map(|idx| {
                if idx == 0 {
                    "YOU".to_string()
                } else {
                    format!("BOT{idx}")
                }
            })
            .collect();

        Self {
            names,
            ..Self::default()
        }
    }

    /// Number of seats at the table.
    pub fn seats(&self) -> usize {
        self.names.len()
    }

    /// Checks this configuration.
    pub fn validate(&self) -> Result<()> {
        let seats = self.seats();
        if !(Self::MIN_SEATS..=Self::MAX_SEATS).contains(&seats) {
            return Err(Error::InvalidConfig(format!(
                "seats must be between {} and {} got {seats}",
                Self::MIN_SEATS,
                Self::MAX_SEATS
            )));
        }

        let total = u32::try_from(seats)
            .ok()
            .and_then(|n| self.stack.amount().checked_mul(n));
        if total.is_none() {
            return Err(Error::InvalidConfig(format!(
                "{seats} stacks of {} overflow the table chips",
                self.stack
            )));
        }

        if self.big_blind == Chips::ZERO {
            return Err(Error::InvalidConfig("big blind must be positive".into()));
        }

        if self.small_blind > self.big_blind {
            return Err(Error::InvalidConfig(format!(
                "small blind {} greater than big blind {}",
                self.small_blind, self.big_blind
            )));
        }

        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            names: vec![
                "YOU".to_string(),
                "BOT1".to_string(),
                "BOT2".to_string(),
                "BOT3".to_string(),
                "BOT4".to_string(),
                "BOT5".to_string(),
            ],
            stack: Chips::new(1_000),
            small_blind: Chips::new(5),
            big_blind: Chips::new(10),
        }
    }
}
