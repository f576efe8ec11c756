// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use std::io;
use tokio::time::{self, Duration, Instant};

use mixtable_bot::{
    Autoplay, Strategy,
    core::{Action, Chips, SeatState, Street, Table, TableState},
};

/// The seat played from the terminal.
pub const HUMAN_SEAT: usize = 0;

const HELP: &str = "[n] new hand  [f] fold  [c] call/check  [r] raise  [s] showdown  [q] quit";

/// A terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    NewHand,
    Act(Action),
    Showdown,
    Quit,
}

impl Command {
    fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char('n') => Some(Command::NewHand),
            KeyCode::Char('f') => Some(Command::Act(Action::Fold)),
            KeyCode::Char('c') => Some(Command::Act(Action::CallOrCheck)),
            KeyCode::Char('r') => Some(Command::Act(Action::Raise)),
            KeyCode::Char('s') => Some(Command::Showdown),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Runs the terminal loop.
pub async fn run<S: Strategy>(table: Table, autoplay: Autoplay<S>, delay: Duration) -> Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = play(&mut stdout, table, autoplay, delay).await;

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

async fn play<S: Strategy>(
    w: &mut impl io::Write,
    mut table: Table,
    mut autoplay: Autoplay<S>,
    delay: Duration,
) -> Result<()> {
    let mut message = "Press n to deal a new hand".to_string();
    print_table(w, &table.state(), &message)?;

    let timer = time::sleep(delay);
    tokio::pin!(timer);

    let mut reader = EventStream::new();
    loop {
        let bot_turn = autoplay.bot_to_act(&table).is_some();

        tokio::select! {
            // A bot plays when the timer expires.
            _ = &mut timer, if bot_turn => {
                message = match autoplay.step(&mut table) {
                    Ok(Some((seat, action))) => {
                        let state = table.state();
                        format!("{} {action}", state.seats[seat].name)
                    }
                    Ok(None) => String::new(),
                    Err(e) => e.to_string(),
                };
                timer.as_mut().reset(Instant::now() + delay);
            },
            // We have received an event form the terminal.
            res = reader.next() => {
                let key = match res {
                    Some(Ok(Event::Key(key))) => key,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                };

                let Some(cmd) = Command::from_key(&key) else {
                    continue;
                };

                let res = match cmd {
                    Command::Quit => break,
                    Command::NewHand => table.start_hand(),
                    Command::Act(action) => table.act_as(HUMAN_SEAT, action),
                    Command::Showdown => table.force_showdown(),
                };

                message = match res {
                    Ok(()) => String::new(),
                    Err(e) => e.to_string(),
                };

                // Give the player time to see the table before the bots act.
                timer.as_mut().reset(Instant::now() + delay);
            },
        };

        print_table(w, &table.state(), &message)?;
    }

    Ok(())
}

fn print_table(w: &mut impl io::Write, state: &TableState, message: &str) -> Result<()> {
    execute!(w, Clear(ClearType::All))?;

    let mut row = 0;
    queue!(
        w,
        cursor::MoveTo(0, row),
        style::PrintStyledContent(header(state).as_str().bold())
    )?;

    row += 2;
    for seat in &state.seats {
        let text = seat_row(state, seat);
        let text = if state.to_act == Some(seat.index) {
            text.as_str().yellow()
        } else if seat.folded || !seat.in_hand {
            text.as_str().dark_grey()
        } else {
            text.as_str().dark_green()
        };

        queue!(w, cursor::MoveTo(0, row), style::PrintStyledContent(text))?;
        row += 1;
    }

    row += 1;
    if let Some(result) = outcome_text(state) {
        queue!(
            w,
            cursor::MoveTo(0, row),
            style::PrintStyledContent(result.as_str().cyan())
        )?;
    }

    row += 2;
    queue!(
        w,
        cursor::MoveTo(0, row),
        style::Print(message),
        cursor::MoveTo(0, row + 1),
        style::PrintStyledContent(HELP.dark_grey())
    )?;

    w.flush()?;

    Ok(())
}

fn header(state: &TableState) -> String {
    let board = state
        .board
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "Hand #{} {:<9} Pot {:<8} Blinds {}/{}  Board {}",
        state.hand_no,
        state.street.to_string(),
        state.pot.to_string(),
        state.small_blind,
        state.big_blind,
        board
    )
}

fn seat_row(state: &TableState, seat: &SeatState) -> String {
    let button = if state.dealer == seat.index && state.hand_no > 0 {
        "D"
    } else {
        ""
    };

    let payout = state
        .outcome
        .as_ref()
        .and_then(|o| o.payouts.get(seat.index).copied())
        .unwrap_or_default();

    let action = if payout > Chips::ZERO {
        "WINNER".to_string()
    } else {
        seat.action.to_string()
    };

    let bet = if seat.bet > Chips::ZERO {
        seat.bet.to_string()
    } else if payout > Chips::ZERO {
        payout.to_string()
    } else {
        String::new()
    };

    // Bot cards are shown only at showdown for seats that did not fold.
    let show = seat.index == HUMAN_SEAT || (state.street == Street::Showdown && !seat.folded);
    let cards = match seat.hole {
        Some([c1, c2]) if show => format!("{c1} {c2}"),
        Some(_) => "▒▒ ▒▒".to_string(),
        None => String::new(),
    };

    format!(
        "{button:^3}|{:<10.10}|{:>8}|{:<14.14}|{:>8}| {cards}",
        seat.name,
        seat.stack.to_string(),
        action,
        bet
    )
}

fn outcome_text(state: &TableState) -> Option<String> {
    let outcome = state.outcome.as_ref()?;
    let names = outcome
        .winners
        .iter()
        .filter_map(|&w| state.seats.get(w).map(|s| s.name.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    let hand = outcome
        .hands
        .iter()
        .find(|h| outcome.winners.first() == Some(&h.seat))
        .map(|h| h.value.to_string());

    Some(match hand {
        Some(hand) => format!("{names} won {} with {hand}", outcome.total_paid()),
        None => format!("{names} won {}, everyone else folded", outcome.total_paid()),
    })
}
