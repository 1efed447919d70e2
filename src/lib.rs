//! Jordle
//!
//! A five-letter word guessing game: six tries to find a hidden word, with
//! green/yellow/gray feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use jordle::core::{Word, FeedbackPattern};
//! use jordle::game::{GuessEngine, RoundStatus, WordBank};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Score a guess directly
//! let guess = Word::new("babes").unwrap();
//! let secret = Word::new("abbey").unwrap();
//! assert_eq!(FeedbackPattern::calculate(&guess, &secret).to_code(), "yyggi");
//!
//! // Or play a round
//! let bank = WordBank::new(vec![secret], vec![guess]).unwrap();
//! let mut engine = GuessEngine::new(&bank, StdRng::seed_from_u64(7)).unwrap();
//! engine.submit_guess("abbey").unwrap();
//! assert_eq!(engine.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game rules and round state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
