//! Error types for the game engine

use crate::core::WordError;
use thiserror::Error;

/// Why a submitted guess was rejected
///
/// Listed in the order the checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidGuessReason {
    #[error("guess must be exactly 5 letters")]
    WrongLength,
    #[error("guess may only contain the letters a-z")]
    NonAlphabetic,
    #[error("not in word list")]
    NotInDictionary,
    #[error("the round is already over")]
    RoundAlreadyOver,
}

impl From<WordError> for InvalidGuessReason {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(_) => Self::WrongLength,
            WordError::NonAlphabetic => Self::NonAlphabetic,
        }
    }
}

/// Errors raised by the word bank and guess engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess was rejected; the round is unchanged and the caller may re-prompt
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] InvalidGuessReason),

    /// No candidate secrets were supplied; the game cannot start
    #[error("Word bank has no candidate secrets")]
    EmptyWordBank,
}

impl GameError {
    /// The rejection reason, if this is an invalid guess
    #[must_use]
    pub const fn invalid_guess_reason(&self) -> Option<InvalidGuessReason> {
        match self {
            Self::InvalidGuess(reason) => Some(*reason),
            Self::EmptyWordBank => None,
        }
    }
}
