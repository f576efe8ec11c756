// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table errors.
use thiserror::Error;

use mixtable_eval::{EvalError, ParseCardError};

/// Errors returned by table operations.
///
/// A failed operation leaves the table state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Cards that cannot be parsed or evaluated.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// An action out of turn or while no hand is in progress.
    #[error("illegal action: {0}")]
    IllegalAction(String),
    /// A hand cannot start with fewer than two funded seats.
    #[error("cannot start hand: {0}")]
    StartupUnavailable(String),
    /// The table configuration is not valid.
    #[error("invalid table config: {0}")]
    InvalidConfig(String),
    /// The deck has not enough cards left.
    #[error("deck exhausted")]
    DeckExhausted,
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        match e {
            EvalError::InvalidInput(msg) => Error::InvalidInput(msg),
        }
    }
}

impl From<ParseCardError> for Error {
    fn from(e: ParseCardError) -> Self {
        Error::InvalidInput(e.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, Error>;
