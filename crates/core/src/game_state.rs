// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Read only view of a table state.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::poker::{Card, Chips, HandValue};

/// The hand street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Street {
    /// No hand has been played yet.
    Idle,
    /// Hole cards dealt and blinds posted.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
    /// The hand has been resolved and the pot paid.
    Showdown,
}

impl Street {
    /// Checks if players can act in this street.
    pub fn is_betting(&self) -> bool {
        !matches!(self, Street::Idle | Street::Showdown)
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Idle => "idle",
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        };

        f.write_str(street)
    }
}

/// An action for the seat that has to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Match the current bet, a check when there is nothing to call.
    CallOrCheck,
    /// Raise the current bet by one big blind.
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Action::Fold => "fold",
            Action::CallOrCheck => "call/check",
            Action::Raise => "raise",
        };

        f.write_str(action)
    }
}

/// The last action of a seat in the current hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatAction {
    /// No action.
    #[default]
    None,
    /// Posted the small blind.
    SmallBlind(Chips),
    /// Posted the big blind.
    BigBlind(Chips),
    /// Checked.
    Check,
    /// Called paying the given chips.
    Call(Chips),
    /// Raised to the given bet.
    Raise(Chips),
    /// Folded.
    Fold,
}

impl fmt::Display for SeatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatAction::None => Ok(()),
            SeatAction::SmallBlind(c) => write!(f, "SB {c}"),
            SeatAction::BigBlind(c) => write!(f, "BB {c}"),
            SeatAction::Check => write!(f, "CHECK"),
            SeatAction::Call(c) => write!(f, "CALL {c}"),
            SeatAction::Raise(c) => write!(f, "RAISE to {c}"),
            SeatAction::Fold => write!(f, "FOLD"),
        }
    }
}

/// A seat view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatState {
    /// The seat index.
    pub index: usize,
    /// The seat display name.
    pub name: String,
    /// The chips behind.
    pub stack: Chips,
    /// The bet in the current street.
    pub bet: Chips,
    /// The hole cards, only for seats dealt into the hand.
    pub hole: Option<[Card; 2]>,
    /// Dealt into the current hand.
    pub in_hand: bool,
    /// Folded in the current hand.
    pub folded: bool,
    /// The last action.
    pub action: SeatAction,
}

impl SeatState {
    /// Checks if this seat is still contesting the pot.
    pub fn is_contesting(&self) -> bool {
        self.in_hand && !self.folded
    }

    /// Checks if this seat has all its chips in the pot.
    pub fn is_all_in(&self) -> bool {
        self.is_contesting() && self.stack == Chips::ZERO
    }
}

/// An evaluated hand at showdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowdownHand {
    /// The seat index.
    pub seat: usize,
    /// The seat hand value.
    pub value: HandValue,
}

/// The result of a hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandOutcome {
    /// The winning seats sorted by index.
    pub winners: Vec<usize>,
    /// The winning hand label, `None` if everyone else folded.
    pub label: Option<String>,
    /// The chips paid to each seat, indexed by seat.
    pub payouts: Vec<Chips>,
    /// The hands evaluated at showdown, empty if everyone else folded.
    pub hands: Vec<ShowdownHand>,
}

impl HandOutcome {
    /// Total chips paid.
    pub fn total_paid(&self) -> Chips {
        self.payouts.iter().copied().sum()
    }

    /// Checks if the hand was won without a showdown.
    pub fn won_by_fold(&self) -> bool {
        self.hands.is_empty()
    }
}

/// A table state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableState {
    /// The hand number, 0 before the first hand.
    pub hand_no: u64,
    /// The current street.
    pub street: Street,
    /// The button seat.
    pub dealer: usize,
    /// The seat that has to act.
    pub to_act: Option<usize>,
    /// Chips collected from previous streets.
    pub pot: Chips,
    /// The highest bet in the current street.
    pub max_bet: Chips,
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind.
    pub big_blind: Chips,
    /// The board cards.
    pub board: Vec<Card>,
    /// The seats.
    pub seats: Vec<SeatState>,
    /// The last hand result, set at showdown.
    pub outcome: Option<HandOutcome>,
}

impl TableState {
    /// Returns the seat that has to act.
    pub fn acting_seat(&self) -> Option<&SeatState> {
        self.to_act.and_then(|idx| self.seats.get(idx))
    }

    /// The chips a seat needs to call.
    pub fn to_call(&self, seat: usize) -> Chips {
        self.seats
            .get(seat)
            .map(|s| self.max_bet - s.bet)
            .unwrap_or_default()
    }

    /// All the chips on the table, stacks, bets and pot.
    pub fn total_chips(&self) -> Chips {
        self.seats.iter().map(|s| s.stack + s.bet).sum::<Chips>() + self.pot
    }
}
