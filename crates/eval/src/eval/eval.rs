// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification and comparison.
use serde::{Deserialize, Serialize};
use std::{
    cmp::{Ordering, Reverse},
    fmt,
};

use mixtable_cards::{Card, Rank};

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pair.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Straight of the same suit.
    StraightFlush,
}

impl HandRank {
    /// The category value, 0 for high card up to 8 for straight flush.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The value of a poker hand.
///
/// Equality and ordering only look at the category and the tie-break values,
/// two hands with different cards but the same value compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    kickers: Vec<u8>,
    hand: [Card; 5],
}

impl HandValue {
    /// Classifies a five cards hand.
    pub(crate) fn from_five(mut hand: [Card; 5]) -> HandValue {
        let mut values = hand.map(|c| c.rank().value());
        values.sort_unstable_by(|a, b| b.cmp(a));

        // Rank groups as (count, value) sorted by count and then by value, this
        // is the tie-break order for all the categories built from groups.
        let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
        for v in values {
            match groups.iter_mut().find(|(_, gv)| *gv == v) {
                Some((count, _)) => *count += 1,
                None => groups.push((1, v)),
            }
        }
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());
        let straight_high = if groups.len() == 5 {
            straight_high(&values)
        } else {
            None
        };

        let top = groups[0].0;
        let second = groups.get(1).map_or(0, |g| g.0);
        let by_groups = || groups.iter().map(|g| g.1).collect::<Vec<_>>();

        let (rank, kickers) = match (is_flush, straight_high) {
            (true, Some(high)) => (HandRank::StraightFlush, vec![high]),
            _ if top == 4 => (HandRank::FourOfAKind, by_groups()),
            _ if top == 3 && second == 2 => (HandRank::FullHouse, by_groups()),
            (true, None) => (HandRank::Flush, values.to_vec()),
            (false, Some(high)) => (HandRank::Straight, vec![high]),
            _ if top == 3 => (HandRank::ThreeOfAKind, by_groups()),
            _ if top == 2 && second == 2 => (HandRank::TwoPair, by_groups()),
            _ if top == 2 => (HandRank::OnePair, by_groups()),
            _ => (HandRank::HighCard, values.to_vec()),
        };

        // Order the cards like the tie-break values, a wheel starts from the five.
        let order = |c: &Card| {
            let value = match (straight_high, c.rank()) {
                (Some(5), Rank::Ace) => 1,
                (_, rank) => rank.value(),
            };
            let count = groups.iter().find(|g| g.1 == c.rank().value()).map_or(0, |g| g.0);
            (count, value)
        };
        hand.sort_by_key(|c| Reverse(order(c)));

        HandValue {
            rank,
            kickers,
            hand,
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break values, most significant first.
    pub fn kickers(&self) -> &[u8] {
        &self.kickers
    }

    /// The five cards that make this hand.
    pub fn hand(&self) -> &[Card; 5] {
        &self.hand
    }

    /// A human readable name for this hand.
    ///
    /// An ace high straight flush is labeled as a royal flush.
    pub fn label(&self) -> &'static str {
        match (self.rank, self.kickers.first()) {
            (HandRank::StraightFlush, Some(14)) => "Royal Flush",
            (rank, _) => rank.label(),
        }
    }

    /// Compares two hands by category and then by tie-break values, a missing
    /// trailing value counts as zero.
    pub fn compare(&self, other: &HandValue) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| {
            let len = self.kickers.len().max(other.kickers.len());
            (0..len)
                .map(|i| {
                    let a = self.kickers.get(i).copied().unwrap_or(0);
                    let b = other.kickers.get(i).copied().unwrap_or(0);
                    a.cmp(&b)
                })
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Returns the straight high card value for five distinct values sorted in
/// descending order.
fn straight_high(values: &[u8; 5]) -> Option<u8> {
    if values[0] - values[4] == 4 {
        Some(values[0])
    } else if values == &[14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())?;
        for (idx, card) in self.hand.iter().enumerate() {
            let sep = if idx == 0 { " (" } else { " " };
            write!(f, "{sep}{card}")?;
        }
        write!(f, ")")
    }
}
