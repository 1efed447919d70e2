//! Core domain types for the game
//!
//! Words and the feedback a guess earns against the secret. Everything here is
//! pure: no randomness, no I/O, no round state.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackPattern};
pub use word::{WORD_LENGTH, Word, WordError};
