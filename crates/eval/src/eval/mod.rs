// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A five cards hand is classified into one of nine [HandRank] categories,
//! checked from the strongest to the weakest, together with a list of
//! tie-break values. Two [HandValue]s compare by category first and then by
//! their tie-break values, most significant first.
//!
//! For 6 and 7 cards hands [HandValue::eval] checks each five cards subset and
//! keeps the best one, [HandValue::evaluate] is the strict Texas Hold'em entry
//! point that requires two hole cards and a complete five cards board.

pub mod eval;
pub use eval::{HandRank, HandValue};

mod eval7;
pub use eval7::EvalError;
