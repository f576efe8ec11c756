// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Mixtable Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use mixtable_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "Td".parse().unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!(td.rank(), Rank::Ten);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 2 cards starting hands:
//!
//! ```
//! # use mixtable_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(2, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_326);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
