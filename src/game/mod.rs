//! Game rules: the word bank, the round engine and session statistics
//!
//! A presentation layer builds one [`WordBank`] at startup, drives a
//! [`GuessEngine`] with the player's guesses, and forwards each
//! [`RoundOutcome`] to [`Statistics`].

mod bank;
mod engine;
mod error;
mod stats;

pub use bank::WordBank;
pub use engine::{GuessEngine, GuessRecord, MAX_ATTEMPTS, RoundOutcome, RoundStatus};
pub use error::{GameError, InvalidGuessReason};
pub use stats::Statistics;
