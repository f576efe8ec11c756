// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Mixtable Poker table engine.
//!
//! A single table of Texas Hold'em with fixed size raises, used by the bots
//! and the terminal client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod config;
pub mod error;
pub mod game_state;
pub mod poker;
pub mod table;

pub use config::TableConfig;
pub use error::{Error, Result};
pub use game_state::{
    Action, HandOutcome, SeatAction, SeatState, ShowdownHand, Street, TableState,
};
pub use poker::{Card, Chips, Deck, HandRank, HandValue, Rank, Suit};
pub use table::Table;
