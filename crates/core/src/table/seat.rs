// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table seat types.
use crate::{
    game_state::{SeatAction, SeatState},
    poker::{Card, Chips},
};

/// A table seat state.
#[derive(Debug, Clone)]
pub(crate) struct Seat {
    /// The seat index.
    pub index: usize,
    /// The seat display name.
    pub name: String,
    /// The chips behind.
    pub stack: Chips,
    /// The bet in the current street.
    pub bet: Chips,
    /// The private cards, set only while dealt into a hand.
    pub hole: Option<[Card; 2]>,
    /// Dealt into the current hand.
    pub in_hand: bool,
    /// Folded in the current hand.
    pub folded: bool,
    /// The last seat action.
    pub action: SeatAction,
}

impl Seat {
    /// Creates a new seat.
    pub fn new(index: usize, name: String, stack: Chips) -> Self {
        Self {
            index,
            name,
            stack,
            bet: Chips::ZERO,
            hole: None,
            in_hand: false,
            folded: false,
            action: SeatAction::None,
        }
    }

    /// Raises this seat bet up to `target`, a seat that has not enough chips
    /// goes all in. Returns the chips paid.
    pub fn pay(&mut self, target: Chips) -> Chips {
        let amount = (target - self.bet).min(self.stack);
        self.stack -= amount;
        self.bet += amount;
        amount
    }

    /// Sets this seat in fold state.
    pub fn fold(&mut self) {
        self.folded = true;
        self.action = SeatAction::Fold;
    }

    /// Reset state for a new hand.
    pub fn start_hand(&mut self) {
        self.in_hand = self.stack > Chips::ZERO;
        self.folded = false;
        self.bet = Chips::ZERO;
        self.hole = None;
        self.action = SeatAction::None;
    }

    /// Still contesting the pot.
    pub fn is_contesting(&self) -> bool {
        self.in_hand && !self.folded
    }

    /// Contesting the pot with chips left to bet.
    pub fn can_act(&self) -> bool {
        self.is_contesting() && self.stack > Chips::ZERO
    }

    /// Returns a view of this seat.
    pub fn state(&self) -> SeatState {
        SeatState {
            index: self.index,
            name: self.name.clone(),
            stack: self.stack,
            bet: self.bet,
            hole: self.hole,
            in_hand: self.in_hand,
            folded: self.folded,
            action: self.action,
        }
    }
}

/// The table seats.
#[derive(Debug, Clone, Default)]
pub(crate) struct Seats {
    seats: Vec<Seat>,
}

impl Seats {
    /// Creates seats with the given names and stack.
    pub fn new(names: &[String], stack: Chips) -> Self {
        let seats = names
            .iter()
            .enumerate()
            .map(|(idx, name)| Seat::new(idx, name.clone(), stack))
            .collect();
        Self { seats }
    }

    /// Number of seats.
    pub fn count(&self) -> usize {
        self.seats.len()
    }

    /// Number of seats with chips.
    pub fn count_with_chips(&self) -> usize {
        self.seats.iter().filter(|s| s.stack > Chips::ZERO).count()
    }

    /// Number of seats contesting the pot.
    pub fn count_contesting(&self) -> usize {
        self.seats.iter().filter(|s| s.is_contesting()).count()
    }

    /// Number of seats that can still bet.
    pub fn count_can_act(&self) -> usize {
        self.seats.iter().filter(|s| s.can_act()).count()
    }

    /// The highest bet in this street.
    pub fn max_bet(&self) -> Chips {
        self.seats.iter().map(|s| s.bet).max().unwrap_or_default()
    }

    /// Checks if all contesting seats matched the highest bet or are all in.
    pub fn bets_matched(&self) -> bool {
        let max_bet = self.max_bet();
        self.seats
            .iter()
            .filter(|s| s.is_contesting())
            .all(|s| s.bet == max_bet || s.stack == Chips::ZERO)
    }

    /// Moves all bets out of the seats returning the total.
    pub fn collect_bets(&mut self) -> Chips {
        self.seats
            .iter_mut()
            .map(|s| std::mem::take(&mut s.bet))
            .sum()
    }

    /// Finds the first seat after `from` that matches `pred`, `from` itself is
    /// checked last.
    pub fn next_after<P>(&self, from: usize, pred: P) -> Option<usize>
    where
        P: Fn(&Seat) -> bool,
    {
        let n = self.seats.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&idx| pred(&self.seats[idx]))
    }

    /// The next seat after `from` that can act.
    pub fn next_to_act(&self, from: usize) -> Option<usize> {
        self.next_after(from, Seat::can_act)
    }

    /// The next seat after `from` dealt into the hand.
    pub fn next_in_hand(&self, from: usize) -> Option<usize> {
        self.next_after(from, |s| s.in_hand)
    }

    /// Set state for a new hand.
    pub fn start_hand(&mut self) {
        self.seats.iter_mut().for_each(Seat::start_hand);
    }

    /// Returns a seat.
    pub fn get(&self, idx: usize) -> Option<&Seat> {
        self.seats.get(idx)
    }

    /// Returns a mutable seat.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Seat> {
        self.seats.get_mut(idx)
    }

    /// Returns an iterator to all seats.
    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    /// Returns a mutable iterator to all seats.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Seat> {
        self.seats.iter_mut()
    }
}
