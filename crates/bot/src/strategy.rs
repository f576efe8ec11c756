// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bot strategies.
use rand::{Rng, SeedableRng, rngs::StdRng};

use mixtable_core::{Action, Chips, TableState};

/// A Poker bot strategy.
pub trait Strategy: Send + 'static {
    /// Chooses an action for `seat` given the table state, called only when
    /// `seat` has to act.
    fn choose_action(&mut self, state: &TableState, seat: usize) -> Action;
}

/// A strategy that always calls or checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl Strategy for CallingStation {
    fn choose_action(&mut self, _state: &TableState, _seat: usize) -> Action {
        Action::CallOrCheck
    }
}

/// A strategy that mostly calls with some random folds and raises.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Probability to fold when facing a bet.
    pub const FOLD: f64 = 0.10;
    /// Probability to raise.
    pub const RAISE: f64 = 0.15;

    /// Creates a strategy seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a strategy with user initialized randomness.
    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_action(&mut self, state: &TableState, seat: usize) -> Action {
        let p = self.rng.random::<f64>();
        let facing_bet = state.to_call(seat) > Chips::ZERO;

        if facing_bet && p < Self::FOLD {
            Action::Fold
        } else if p >= 1.0 - Self::RAISE {
            Action::Raise
        } else {
            Action::CallOrCheck
        }
    }
}
