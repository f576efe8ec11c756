// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Mixtable Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator checks every
//! five cards subset of the hand, classifies it and keeps the strongest one, so
//! the result carries both the hand value and the five cards that make it.
//!
//! To evaluate a Texas Hold'em hand use [HandValue::evaluate] with two hole
//! cards and five board cards:
//!
//! ```
//! # use mixtable_eval::*;
//! let hole = Card::parse_list("As Ad").unwrap();
//! let board = Card::parse_list("Ah 7d 2c Ts 9h").unwrap();
//!
//! let v1 = HandValue::evaluate(&hole, &board).unwrap();
//! assert_eq!(v1.rank(), HandRank::ThreeOfAKind);
//! assert_eq!(v1.label(), "Three of a Kind");
//!
//! let hole = Card::parse_list("Kc Kd").unwrap();
//! let v2 = HandValue::evaluate(&hole, &board).unwrap();
//! assert!(v1 > v2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue};

// Reexport cards types.
pub use mixtable_cards::{Card, Deck, ParseCardError, Rank, Suit};
