// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards out of 6 and 7 cards hands.
use thiserror::Error;

use mixtable_cards::{Card, ParseCardError};

use super::HandValue;

/// Evaluator errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The cards cannot be evaluated.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<ParseCardError> for EvalError {
    fn from(e: ParseCardError) -> Self {
        EvalError::InvalidInput(e.to_string())
    }
}

impl HandValue {
    /// Evaluates a Texas Hold'em hand given two hole cards and five board cards.
    ///
    /// Fails with [EvalError::InvalidInput] unless there are exactly 2 hole
    /// cards, 5 board cards, and all 7 cards are distinct.
    pub fn evaluate(hole: &[Card], board: &[Card]) -> Result<HandValue, EvalError> {
        if hole.len() != 2 {
            return Err(EvalError::InvalidInput(format!(
                "expected 2 hole cards got {}",
                hole.len()
            )));
        }

        if board.len() != 5 {
            return Err(EvalError::InvalidInput(format!(
                "expected 5 board cards got {}",
                board.len()
            )));
        }

        let mut cards = Vec::with_capacity(7);
        cards.extend_from_slice(hole);
        cards.extend_from_slice(board);
        Self::eval(&cards)
    }

    /// Like [HandValue::evaluate] with cards given as codes, for example
    /// `evaluate_codes("As Ad", "Ah 7d 2c Ts 9h")`.
    pub fn evaluate_codes(hole: &str, board: &str) -> Result<HandValue, EvalError> {
        let hole = Card::parse_list(hole)?;
        let board = Card::parse_list(board)?;
        Self::evaluate(&hole, &board)
    }

    /// Evaluates a 5, 6 or 7 distinct cards hand returning the value of the
    /// best five cards hand.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        let n = cards.len();
        if !(5..=7).contains(&n) {
            return Err(EvalError::InvalidInput(format!(
                "expected 5 to 7 cards got {n}"
            )));
        }

        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(EvalError::InvalidInput(format!("duplicate card {card}")));
            }
        }

        let mut best: Option<HandValue> = None;
        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let value = HandValue::from_five(hand);
                            if best.as_ref().is_none_or(|b| value > *b) {
                                best = Some(value);
                            }
                        }
                    }
                }
            }
        }

        // There is at least one subset as n >= 5.
        best.ok_or_else(|| EvalError::InvalidInput("no five cards hand".to_string()))
    }
}
