// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table betting engine.
//!
//! A [Table] owns the seats, the deck, the board and the pot and moves
//! through the hand streets one action at a time:
//!
//! ```
//! # use mixtable_core::{Action, Street, Table, TableConfig};
//! let mut table = Table::new(TableConfig::with_seats(2)).unwrap();
//! table.start_hand().unwrap();
//! assert_eq!(table.street(), Street::Preflop);
//!
//! // The small blind folds and the big blind takes the pot.
//! table.act(Action::Fold).unwrap();
//! assert_eq!(table.street(), Street::Showdown);
//! ```
//!
//! Every operation either applies completely or fails leaving the table
//! unchanged.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

mod seat;
use seat::Seats;

use crate::{
    config::TableConfig,
    error::{Error, Result},
    game_state::{Action, HandOutcome, SeatAction, ShowdownHand, Street, TableState},
    poker::{Card, Chips, Deck, HandValue},
};

/// A poker table.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    seats: Seats,
    hand_no: u64,
    street: Street,
    dealer: usize,
    to_act: Option<usize>,
    pot: Chips,
    board: Vec<Card>,
    deck: Deck,
    outcome: Option<HandOutcome>,
    rng: StdRng,
}

impl Table {
    /// Creates a new table.
    pub fn new(config: TableConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a new table with user initialized randomness.
    pub fn with_rng(config: TableConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            seats: Seats::new(&config.names, config.stack),
            config,
            hand_no: 0,
            street: Street::Idle,
            dealer: 0,
            to_act: None,
            pot: Chips::ZERO,
            board: Vec::with_capacity(5),
            deck: Deck::default(),
            outcome: None,
            rng,
        })
    }

    /// Starts a new hand, moves the button, deals the hole cards and posts
    /// the blinds.
    pub fn start_hand(&mut self) -> Result<()> {
        if self.street.is_betting() {
            return Err(Error::IllegalAction(format!(
                "hand {} in progress on the {}",
                self.hand_no, self.street
            )));
        }

        let funded = self.seats.count_with_chips();
        if funded < 2 {
            return Err(Error::StartupUnavailable(format!(
                "{funded} seats with chips, at least 2 needed"
            )));
        }

        self.hand_no += 1;
        self.pot = Chips::ZERO;
        self.board.clear();
        self.outcome = None;
        self.to_act = None;
        self.deck = Deck::new_and_shuffled(&mut self.rng);
        self.seats.start_hand();

        // There are at least 2 seats in the hand.
        self.dealer = self.seats.next_in_hand(self.dealer).unwrap_or(self.dealer);
        let sb_idx = self.seats.next_in_hand(self.dealer).unwrap_or(self.dealer);
        let bb_idx = self.seats.next_in_hand(sb_idx).unwrap_or(sb_idx);

        // Deal the hole cards starting from the seat after the button.
        let n = self.seats.count();
        for k in 1..=n {
            let idx = (self.dealer + k) % n;
            if self.seats.get(idx).is_some_and(|s| s.in_hand) {
                let hole = [self.draw()?, self.draw()?];
                if let Some(seat) = self.seats.get_mut(idx) {
                    debug!("Seat {} dealt {} {}", seat.name, hole[0], hole[1]);
                    seat.hole = Some(hole);
                }
            }
        }

        self.post_blind(sb_idx, self.config.small_blind, SeatAction::SmallBlind);
        self.post_blind(bb_idx, self.config.big_blind, SeatAction::BigBlind);

        self.street = Street::Preflop;

        info!(
            "Hand {} started, button seat {}, blinds {}/{}",
            self.hand_no, self.dealer, self.config.small_blind, self.config.big_blind
        );

        self.pass_action(bb_idx, false)
    }

    /// Applies an action for the seat that has to act.
    pub fn act(&mut self, action: Action) -> Result<()> {
        let Some(idx) = self.to_act.filter(|_| self.street.is_betting()) else {
            return Err(Error::IllegalAction(format!(
                "no seat can {action} on the {}",
                self.street
            )));
        };

        match action {
            Action::Fold => self.fold(idx),
            Action::CallOrCheck => self.call_or_check(idx),
            Action::Raise => self.raise(idx),
        }
    }

    /// Applies an action for the given seat, fails if it is not the seat turn.
    pub fn act_as(&mut self, seat: usize, action: Action) -> Result<()> {
        if self.to_act != Some(seat) {
            return Err(Error::IllegalAction(format!(
                "seat {seat} cannot {action}, not its turn"
            )));
        }

        self.act(action)
    }

    /// Skips the remaining betting, deals the missing board cards and
    /// resolves the hand.
    pub fn force_showdown(&mut self) -> Result<()> {
        if !self.street.is_betting() {
            return Err(Error::IllegalAction(format!(
                "no hand to show down on the {}",
                self.street
            )));
        }

        let burns = match self.board.len() {
            0 => 3,
            3 => 2,
            4 => 1,
            _ => 0,
        };
        if self.deck.count() < burns + 5 - self.board.len() {
            return Err(Error::DeckExhausted);
        }

        self.pot += self.seats.collect_bets();
        self.to_act = None;

        while self.board.len() < 5 {
            let (next, cards) = match self.board.len() {
                0 => (Street::Flop, 3),
                3 => (Street::Turn, 1),
                _ => (Street::River, 1),
            };

            self.deal_board(cards)?;
            self.street = next;
        }

        info!("Hand {} forced to showdown", self.hand_no);
        self.showdown()
    }

    /// Returns a snapshot of the table state.
    pub fn state(&self) -> TableState {
        TableState {
            hand_no: self.hand_no,
            street: self.street,
            dealer: self.dealer,
            to_act: self.to_act,
            pot: self.pot,
            max_bet: self.seats.max_bet(),
            small_blind: self.config.small_blind,
            big_blind: self.config.big_blind,
            board: self.board.clone(),
            seats: self.seats.iter().map(|s| s.state()).collect(),
            outcome: self.outcome.clone(),
        }
    }

    /// The table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The current street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The seat that has to act.
    pub fn to_act(&self) -> Option<usize> {
        self.to_act
    }

    /// The number of hands started.
    pub fn hand_no(&self) -> u64 {
        self.hand_no
    }

    /// The button seat.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Chips collected from previous streets.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The last hand result.
    pub fn outcome(&self) -> Option<&HandOutcome> {
        self.outcome.as_ref()
    }

    /// The chips the seat that has to act needs to call.
    pub fn to_call(&self) -> Chips {
        self.to_act
            .and_then(|idx| self.seats.get(idx))
            .map(|s| self.seats.max_bet() - s.bet)
            .unwrap_or_default()
    }

    /// The actions the seat that has to act can take.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.street.is_betting() && self.to_act.is_some() {
            vec![Action::Fold, Action::CallOrCheck, Action::Raise]
        } else {
            Vec::new()
        }
    }

    fn fold(&mut self, idx: usize) -> Result<()> {
        if let Some(seat) = self.seats.get_mut(idx) {
            seat.fold();
            debug!("Seat {} folds", seat.name);
        }

        if self.seats.count_contesting() == 1 {
            self.pot += self.seats.collect_bets();
            return self.showdown();
        }

        self.pass_action(idx, false)
    }

    fn call_or_check(&mut self, idx: usize) -> Result<()> {
        let max_bet = self.seats.max_bet();
        if let Some(seat) = self.seats.get_mut(idx) {
            let to_call = max_bet - seat.bet;
            let paid = seat.pay(max_bet);
            seat.action = if to_call == Chips::ZERO {
                SeatAction::Check
            } else {
                SeatAction::Call(paid)
            };
            debug!("Seat {} {}", seat.name, seat.action);
        }

        let round_over = self.seats.bets_matched();
        self.pass_action(idx, round_over)
    }

    fn raise(&mut self, idx: usize) -> Result<()> {
        let max_bet = self.seats.max_bet();
        let target = max_bet + self.config.big_blind;
        if let Some(seat) = self.seats.get_mut(idx) {
            let paid = seat.pay(target);
            // A short stack that cannot go over the current bet only calls.
            seat.action = if seat.bet > max_bet {
                SeatAction::Raise(seat.bet)
            } else {
                SeatAction::Call(paid)
            };
            debug!("Seat {} {}", seat.name, seat.action);
        }

        self.pass_action(idx, false)
    }

    fn post_blind(&mut self, idx: usize, blind: Chips, action: fn(Chips) -> SeatAction) {
        if let Some(seat) = self.seats.get_mut(idx) {
            let paid = seat.pay(blind);
            seat.action = action(paid);
            debug!("Seat {} {}", seat.name, seat.action);
        }
    }

    /// Passes the action to the next seat after `from` or ends the round.
    ///
    /// The round also ends when the bets are matched and fewer than two seats
    /// have chips left to bet.
    fn pass_action(&mut self, from: usize, round_over: bool) -> Result<()> {
        let all_in = self.seats.bets_matched() && self.seats.count_can_act() < 2;
        if round_over || all_in {
            return self.end_round();
        }

        match self.seats.next_to_act(from) {
            Some(next) => {
                self.to_act = Some(next);
                Ok(())
            }
            None => self.end_round(),
        }
    }

    /// Collects the bets and deals the next street, if fewer than two seats
    /// can bet the board is dealt until the river and the hand resolved.
    fn end_round(&mut self) -> Result<()> {
        self.pot += self.seats.collect_bets();
        self.to_act = None;

        loop {
            let (next, cards) = match self.street {
                Street::Preflop => (Street::Flop, 3),
                Street::Flop => (Street::Turn, 1),
                Street::Turn => (Street::River, 1),
                Street::River => return self.showdown(),
                Street::Idle | Street::Showdown => return Ok(()),
            };

            self.deal_board(cards)?;
            self.street = next;
            info!("Dealt the {next}, board {}, pot {}", self.board_text(), self.pot);

            if self.seats.count_can_act() >= 2 {
                self.to_act = self.seats.next_to_act(self.dealer);
                return Ok(());
            }
        }
    }

    /// Pays the pot to the best hands.
    fn showdown(&mut self) -> Result<()> {
        let contesting = self
            .seats
            .iter()
            .filter(|s| s.is_contesting())
            .map(|s| s.index)
            .collect::<Vec<_>>();

        // Nothing to evaluate if everyone else folded.
        let hands = if contesting.len() > 1 {
            contesting
                .iter()
                .map(|&seat| {
                    self.evaluate_seat(seat)
                        .map(|value| ShowdownHand { seat, value })
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        let best = hands.iter().map(|h| &h.value).max().cloned();
        let winners = match &best {
            Some(best) => hands
                .iter()
                .filter(|h| &h.value == best)
                .map(|h| h.seat)
                .collect::<Vec<_>>(),
            None => contesting,
        };

        self.pot += self.seats.collect_bets();
        let payouts = Self::split_pot(self.pot, &winners, self.seats.count());
        for (seat, chips) in self.seats.iter_mut().zip(&payouts) {
            seat.stack += *chips;
            if *chips > Chips::ZERO {
                info!("Seat {} wins {chips}", seat.name);
            }
        }

        let label = best.as_ref().map(|v| v.label().to_string());
        if let Some(label) = &label {
            info!("Hand {} won with {label}", self.hand_no);
        }

        self.pot = Chips::ZERO;
        self.street = Street::Showdown;
        self.to_act = None;
        self.outcome = Some(HandOutcome {
            winners,
            label,
            payouts,
            hands,
        });

        Ok(())
    }

    /// Splits a pot evenly, the first winner gets the odd chips.
    fn split_pot(pot: Chips, winners: &[usize], seats: usize) -> Vec<Chips> {
        let mut payouts = vec![Chips::ZERO; seats];
        if winners.is_empty() {
            return payouts;
        }

        let n = winners.len() as u32;
        let share = pot / n;
        let remainder = pot - share * n;

        for (pos, &idx) in winners.iter().enumerate() {
            if let Some(payout) = payouts.get_mut(idx) {
                *payout = if pos == 0 { share + remainder } else { share };
            }
        }

        payouts
    }

    fn evaluate_seat(&self, idx: usize) -> Result<HandValue> {
        let hole = self
            .seats
            .get(idx)
            .and_then(|s| s.hole)
            .ok_or_else(|| Error::InvalidInput(format!("seat {idx} has no hole cards")))?;

        Ok(HandValue::evaluate(&hole, &self.board)?)
    }

    /// Burns a card and deals `n` cards to the board.
    fn deal_board(&mut self, n: usize) -> Result<()> {
        if self.deck.count() < n + 1 {
            return Err(Error::DeckExhausted);
        }

        self.deck.burn();
        for _ in 0..n {
            let card = self.draw()?;
            self.board.push(card);
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<Card> {
        self.deck.deal().ok_or(Error::DeckExhausted)
    }

    fn board_text(&self) -> String {
        self.board
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::Rng;

    /// Creates a table with the given stacks and seeded randomness.
    fn new_table(stacks: &[u32]) -> Table {
        let config = TableConfig::with_seats(stacks.len());
        let mut table = Table::with_rng(config, StdRng::seed_from_u64(13)).unwrap();
        for (seat, stack) in table.seats.iter_mut().zip(stacks) {
            seat.stack = Chips::new(*stack);
        }
        table
    }

    /// Replaces the hole cards and stacks the deck so that the next streets
    /// deal the given board.
    fn rig(table: &mut Table, holes: &[&str], board: &str) {
        let mut used = Vec::new();
        for (seat, hole) in table.seats.iter_mut().zip(holes) {
            let cards = Card::parse_list(hole).unwrap();
            seat.hole = Some([cards[0], cards[1]]);
            used.extend(cards);
        }

        let board = Card::parse_list(board).unwrap();
        used.extend(board.iter().copied());

        let mut spare = Deck::default().into_iter().filter(|c| !used.contains(c));
        let mut burn = || spare.next().unwrap();
        let order = vec![
            burn(),
            board[0],
            board[1],
            board[2],
            burn(),
            board[3],
            burn(),
            board[4],
        ];
        table.deck = order.into_iter().rev().collect();
    }

    fn stacks(table: &Table) -> Vec<u32> {
        table.seats.iter().map(|s| s.stack.amount()).collect()
    }

    #[test]
    fn new_table_is_idle() {
        let mut table = new_table(&[1000, 1000]);
        assert_eq!(table.street(), Street::Idle);
        assert_eq!(table.to_act(), None);
        assert!(table.legal_actions().is_empty());

        assert!(matches!(
            table.act(Action::CallOrCheck),
            Err(Error::IllegalAction(_))
        ));
        assert!(matches!(
            table.force_showdown(),
            Err(Error::IllegalAction(_))
        ));
        assert_eq!(table.state().hand_no, 0);
    }

    #[test]
    fn invalid_config() {
        let config = TableConfig::with_seats(1);
        assert!(matches!(
            Table::new(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn start_hand_heads_up() {
        let mut table = new_table(&[1000, 1000]);
        table.start_hand().unwrap();

        let state = table.state();
        assert_eq!(state.hand_no, 1);
        assert_eq!(state.street, Street::Preflop);
        assert_eq!(state.dealer, 1);
        assert_eq!(state.pot, Chips::ZERO);
        assert!(state.board.is_empty());

        // The seat after the button posts the small blind and acts first.
        assert_eq!(state.seats[0].bet, Chips::new(5));
        assert_eq!(state.seats[0].stack, Chips::new(995));
        assert_eq!(state.seats[0].action, SeatAction::SmallBlind(Chips::new(5)));
        assert_eq!(state.seats[1].bet, Chips::new(10));
        assert_eq!(state.seats[1].action, SeatAction::BigBlind(Chips::new(10)));
        assert_eq!(state.to_act, Some(0));
        assert_eq!(table.to_call(), Chips::new(5));
        assert_eq!(table.legal_actions().len(), 3);

        assert!(state.seats.iter().all(|s| s.hole.is_some() && s.in_hand));
        assert_eq!(table.deck.count(), Deck::SIZE - 4);
    }

    #[test]
    fn start_hand_six_seats() {
        let mut table = new_table(&[1000; 6]);
        table.start_hand().unwrap();

        let state = table.state();
        assert_eq!(state.dealer, 1);
        assert_eq!(state.seats[2].bet, Chips::new(5));
        assert_eq!(state.seats[3].bet, Chips::new(10));
        assert_eq!(state.to_act, Some(4));
        assert_eq!(state.max_bet, Chips::new(10));

        // The button moves at every hand.
        table.force_showdown().unwrap();
        table.start_hand().unwrap();
        assert_eq!(table.dealer(), 2);
        assert_eq!(table.to_act(), Some(5));
    }

    #[test]
    fn start_hand_skips_empty_seats() {
        let mut table = new_table(&[1000, 1000, 0]);
        table.start_hand().unwrap();

        let state = table.state();
        assert!(!state.seats[2].in_hand);
        assert!(state.seats[2].hole.is_none());
        assert_eq!(state.dealer, 1);
        assert_eq!(state.seats[0].bet, Chips::new(5));
        assert_eq!(state.seats[1].bet, Chips::new(10));
        assert_eq!(state.to_act, Some(0));

        // The next button skips the empty seat.
        table.force_showdown().unwrap();
        table.start_hand().unwrap();
        assert_eq!(table.dealer(), 0);
    }

    #[test]
    fn start_needs_two_funded_seats() {
        let mut table = new_table(&[1000, 0, 0]);
        assert!(matches!(
            table.start_hand(),
            Err(Error::StartupUnavailable(_))
        ));

        let state = table.state();
        assert_eq!(state.street, Street::Idle);
        assert_eq!(state.hand_no, 0);
        assert!(state.seats.iter().all(|s| s.hole.is_none()));
    }

    #[test]
    fn start_during_hand_is_illegal() {
        let mut table = new_table(&[1000, 1000]);
        table.start_hand().unwrap();
        let deck_count = table.deck.count();

        assert!(matches!(table.start_hand(), Err(Error::IllegalAction(_))));
        assert_eq!(table.hand_no(), 1);
        assert_eq!(table.deck.count(), deck_count);
    }

    #[test]
    fn act_out_of_turn() {
        let mut table = new_table(&[1000, 1000, 1000]);
        table.start_hand().unwrap();

        let to_act = table.to_act().unwrap();
        let other = (to_act + 1) % 3;
        let before = stacks(&table);

        assert!(matches!(
            table.act_as(other, Action::Raise),
            Err(Error::IllegalAction(_))
        ));
        assert_eq!(stacks(&table), before);
        assert_eq!(table.to_act(), Some(to_act));

        table.act_as(to_act, Action::CallOrCheck).unwrap();
        assert_ne!(table.to_act(), Some(to_act));
    }

    #[test]
    fn fold_to_one_seat() {
        let mut table = new_table(&[1000, 1000]);
        table.start_hand().unwrap();
        table.act(Action::Fold).unwrap();

        let state = table.state();
        assert_eq!(state.street, Street::Showdown);
        assert_eq!(state.to_act, None);
        assert_eq!(state.pot, Chips::ZERO);
        assert_eq!(stacks(&table), vec![995, 1005]);

        let outcome = state.outcome.unwrap();
        assert_eq!(outcome.winners, vec![1]);
        assert_eq!(outcome.label, None);
        assert!(outcome.won_by_fold());
        assert_eq!(outcome.payouts, vec![Chips::ZERO, Chips::new(15)]);

        // Nothing left to do until the next hand.
        assert!(table.act(Action::Fold).is_err());
        assert!(table.force_showdown().is_err());
        table.start_hand().unwrap();
        assert_eq!(table.hand_no(), 2);
    }

    #[test]
    fn fold_passes_action() {
        let mut table = new_table(&[1000, 1000, 1000]);
        table.start_hand().unwrap();

        // Button at 1, blinds at 2 and 0, seat 1 acts first.
        assert_eq!(table.to_act(), Some(1));
        table.act(Action::Fold).unwrap();

        let state = table.state();
        assert_eq!(state.street, Street::Preflop);
        assert!(state.seats[1].folded);
        assert_eq!(state.seats[1].action, SeatAction::Fold);
        assert_eq!(state.to_act, Some(2));

        // The small blind completes and the round is over.
        table.act(Action::CallOrCheck).unwrap();
        assert_eq!(table.street(), Street::Flop);
        assert_eq!(table.pot(), Chips::new(20));

        // The folded seat is skipped.
        assert_eq!(table.to_act(), Some(2));
    }

    #[test]
    fn call_and_checks_to_showdown() {
        let mut table = new_table(&[1000, 1000]);
        table.start_hand().unwrap();

        table.act(Action::CallOrCheck).unwrap();
        assert_eq!(table.street(), Street::Flop);
        assert_eq!(table.board().len(), 3);
        assert_eq!(table.pot(), Chips::new(20));
        assert_eq!(table.state().seats[0].action, SeatAction::Call(Chips::new(5)));
        assert!(table.seats.iter().all(|s| s.bet == Chips::ZERO));
        assert_eq!(table.to_act(), Some(0));

        table.act(Action::CallOrCheck).unwrap();
        assert_eq!(table.street(), Street::Turn);
        assert_eq!(table.board().len(), 4);
        assert_eq!(table.state().seats[0].action, SeatAction::Check);

        table.act(Action::CallOrCheck).unwrap();
        assert_eq!(table.street(), Street::River);
        assert_eq!(table.board().len(), 5);

        table.act(Action::CallOrCheck).unwrap();
        let state = table.state();
        assert_eq!(state.street, Street::Showdown);
        assert_eq!(state.pot, Chips::ZERO);
        assert_eq!(state.total_chips(), Chips::new(2000));

        let outcome = state.outcome.unwrap();
        assert_eq!(outcome.hands.len(), 2);
        assert_eq!(outcome.total_paid(), Chips::new(20));
        assert!(outcome.label.is_some());

        // Hole cards, 3 burns and the board are gone from the deck.
        assert_eq!(table.deck.count(), Deck::SIZE - 4 - 3 - 5);
    }

    #[test]
    fn raise_by_big_blind() {
        let mut table = new_table(&[1000, 1000]);
        table.start_hand().unwrap();

        table.act(Action::Raise).unwrap();
        let state = table.state();
        assert_eq!(state.seats[0].bet, Chips::new(20));
        assert_eq!(state.seats[0].stack, Chips::new(980));
        assert_eq!(state.seats[0].action, SeatAction::Raise(Chips::new(20)));
        assert_eq!(state.to_act, Some(1));
        assert_eq!(state.street, Street::Preflop);

        table.act(Action::Raise).unwrap();
        assert_eq!(table.state().seats[1].bet, Chips::new(30));
        assert_eq!(table.to_call(), Chips::new(10));

        table.act(Action::CallOrCheck).unwrap();
        assert_eq!(table.street(), Street::Flop);
        assert_eq!(table.pot(), Chips::new(60));
    }

    #[test]
    fn trips_beat_overpair_at_showdown() {
        let mut table = new_table(&[1000, 1000]);
        table.start_hand().unwrap();
        rig(&mut table, &["As Ad", "Kc Kd"], "Ah 7d 2c Ts 9h");

        table.force_showdown().unwrap();

        let state = table.state();
        assert_eq!(state.street, Street::Showdown);
        assert_eq!(state.board, Card::parse_list("Ah 7d 2c Ts 9h").unwrap());

        let outcome = state.outcome.unwrap();
        assert_eq!(outcome.winners, vec![0]);
        assert_eq!(outcome.label.as_deref(), Some("Three of a Kind"));
        assert_eq!(outcome.payouts, vec![Chips::new(15), Chips::ZERO]);
        assert_eq!(stacks(&table), vec![1010, 990]);
    }

    #[test]
    fn split_pot_on_board() {
        let mut table = new_table(&[1000, 1000]);
        table.start_hand().unwrap();
        rig(&mut table, &["2c 3d", "4c 5d"], "Ah Kh Qh Jh Th");

        table.force_showdown().unwrap();

        let outcome = table.outcome().unwrap();
        assert_eq!(outcome.winners, vec![0, 1]);
        assert_eq!(outcome.label.as_deref(), Some("Royal Flush"));

        // The pot of 15 splits 8 and 7.
        assert_eq!(outcome.payouts, vec![Chips::new(8), Chips::new(7)]);
        assert_eq!(stacks(&table), vec![1003, 997]);
    }

    #[test]
    fn split_pot_remainder() {
        let payouts = Table::split_pot(Chips::new(101), &[1, 3], 4);
        assert_eq!(
            payouts,
            vec![Chips::ZERO, Chips::new(51), Chips::ZERO, Chips::new(50)]
        );
        assert_eq!(payouts.iter().copied().sum::<Chips>(), Chips::new(101));

        let payouts = Table::split_pot(Chips::new(100), &[0, 1, 2], 3);
        assert_eq!(payouts, vec![Chips::new(34), Chips::new(33), Chips::new(33)]);
    }

    #[test]
    fn force_showdown_from_flop() {
        let mut table = new_table(&[1000, 1000]);
        table.start_hand().unwrap();
        table.act(Action::CallOrCheck).unwrap();
        table.act(Action::Raise).unwrap();
        assert_eq!(table.street(), Street::Flop);

        table.force_showdown().unwrap();
        assert_eq!(table.street(), Street::Showdown);
        assert_eq!(table.board().len(), 5);
        assert_eq!(table.deck.count(), Deck::SIZE - 4 - 3 - 5);

        // The outstanding raise is in the pot that was paid out.
        assert_eq!(table.outcome().unwrap().total_paid(), Chips::new(30));
        assert_eq!(table.state().total_chips(), Chips::new(2000));
    }

    #[test]
    fn short_call_goes_all_in() {
        let mut table = new_table(&[12, 1000]);
        table.start_hand().unwrap();

        // The short stack raise is capped at its stack.
        table.act(Action::Raise).unwrap();
        let state = table.state();
        assert_eq!(state.seats[0].bet, Chips::new(12));
        assert_eq!(state.seats[0].stack, Chips::ZERO);
        assert!(state.seats[0].is_all_in());
        assert_eq!(state.to_act, Some(1));

        // Calling leaves only one seat with chips, the board runs out.
        table.act(Action::CallOrCheck).unwrap();
        let state = table.state();
        assert_eq!(state.street, Street::Showdown);
        assert_eq!(state.board.len(), 5);
        assert_eq!(state.total_chips(), Chips::new(1012));
        assert_eq!(state.outcome.unwrap().total_paid(), Chips::new(24));
    }

    #[test]
    fn short_raise_is_a_call() {
        let mut table = new_table(&[8, 1000]);
        table.start_hand().unwrap();

        // The small blind has 3 chips left, not enough to go over the big blind.
        table.act(Action::Raise).unwrap();
        let state = table.state();
        assert_eq!(state.seats[0].action, SeatAction::Call(Chips::new(3)));
        assert_eq!(state.seats[0].stack, Chips::ZERO);
        assert_eq!(state.street, Street::Showdown);
        assert_eq!(state.total_chips(), Chips::new(1008));
    }

    #[test]
    fn large_stacks() {
        let config = TableConfig {
            stack: Chips::new(2_000_000_000),
            big_blind: Chips::new(2_000_000_000),
            ..TableConfig::with_seats(2)
        };
        let mut table = Table::with_rng(config, StdRng::seed_from_u64(3)).unwrap();
        table.start_hand().unwrap();
        table.act(Action::CallOrCheck).unwrap();

        let state = table.state();
        assert_eq!(state.street, Street::Showdown);
        assert_eq!(state.total_chips(), Chips::new(4_000_000_000));
        assert_eq!(
            state.outcome.unwrap().total_paid(),
            Chips::new(4_000_000_000)
        );
    }

    #[test]
    fn all_in_blind_runs_out() {
        let mut table = new_table(&[3, 1000]);
        table.start_hand().unwrap();

        // The small blind is all in for less than the big blind and nobody
        // else can bet.
        let state = table.state();
        assert_eq!(state.street, Street::Showdown);
        assert_eq!(state.board.len(), 5);
        assert_eq!(state.total_chips(), Chips::new(1003));
        assert_eq!(state.outcome.unwrap().total_paid(), Chips::new(13));
    }

    #[test]
    fn no_duplicate_cards() {
        let mut table = new_table(&[1000; 6]);
        for _ in 0..20 {
            table.start_hand().unwrap();
            while table.street().is_betting() {
                let state = table.state();
                let mut cards = HashSet::default();
                let mut in_hand = 0;
                for seat in &state.seats {
                    if let Some(hole) = seat.hole {
                        cards.extend(hole);
                        in_hand += 1;
                    }
                }
                cards.extend(state.board.iter().copied());
                assert_eq!(cards.len(), 2 * in_hand + state.board.len());
                assert!(cards.iter().all(|c| !table.deck.contains(*c)));

                table.act(Action::CallOrCheck).unwrap();
            }
        }
    }

    #[test]
    fn chips_are_conserved() {
        let mut table = new_table(&[200, 300, 400, 100, 250, 750]);
        let total = Chips::new(2000);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..300 {
            match table.start_hand() {
                Ok(()) => {}
                Err(Error::StartupUnavailable(_)) => break,
                Err(e) => panic!("unexpected error {e}"),
            }
            assert_eq!(table.state().total_chips(), total);

            while table.street().is_betting() {
                let action = match rng.random_range(0..10) {
                    0 => Action::Fold,
                    1 | 2 => Action::Raise,
                    3 if table.street() != Street::Preflop => {
                        table.force_showdown().unwrap();
                        break;
                    }
                    _ => Action::CallOrCheck,
                };

                let to_act = table.to_act().unwrap();
                table.act(action).unwrap();
                assert_eq!(table.state().total_chips(), total);

                // A folded seat never acts again in the hand.
                if action == Action::Fold && table.street().is_betting() {
                    assert_ne!(table.to_act(), Some(to_act));
                }
            }

            let state = table.state();
            assert_eq!(state.street, Street::Showdown);
            assert_eq!(state.pot, Chips::ZERO);
            assert_eq!(state.total_chips(), total);

            let outcome = state.outcome.unwrap();
            assert!(!outcome.winners.is_empty());
            assert!(outcome.winners.iter().all(|&w| state.seats[w].is_contesting()));
        }
    }
}
