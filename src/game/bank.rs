//! The valid-word universe
//!
//! Candidate secrets are kept in load order for uniform random selection;
//! acceptable guesses live in a hash set for membership tests.

use super::error::GameError;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Immutable word lists for the lifetime of the process
///
/// Invariant: every candidate secret is also an acceptable guess. The
/// constructor enforces this by folding the candidates into the guess set.
#[derive(Debug, Clone)]
pub struct WordBank {
    candidates: Vec<Word>,
    acceptable: FxHashSet<Word>,
}

impl WordBank {
    /// Build a bank from candidate secrets and acceptable guesses
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyWordBank`] if `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use jordle::core::Word;
    /// use jordle::game::WordBank;
    ///
    /// let words = |list: &[&str]| list.iter().map(|w| Word::new(w).unwrap()).collect::<Vec<_>>();
    /// let bank = WordBank::new(words(&["abbey"]), words(&["babes"])).unwrap();
    ///
    /// assert!(bank.is_acceptable_guess(&Word::new("ABBEY").unwrap()));
    /// assert!(bank.is_acceptable_guess(&Word::new("babes").unwrap()));
    /// ```
    pub fn new(
        candidates: Vec<Word>,
        acceptable: impl IntoIterator<Item = Word>,
    ) -> Result<Self, GameError> {
        if candidates.is_empty() {
            return Err(GameError::EmptyWordBank);
        }

        let mut acceptable: FxHashSet<Word> = acceptable.into_iter().collect();
        acceptable.extend(candidates.iter().cloned());

        log::debug!(
            "Word bank loaded: {} candidate secrets, {} acceptable guesses",
            candidates.len(),
            acceptable.len()
        );

        Ok(Self {
            candidates,
            acceptable,
        })
    }

    /// Pick a secret uniformly at random from the candidates
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyWordBank`] if there are no candidates. A bank
    /// built through [`WordBank::new`] always has at least one.
    pub fn select_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, GameError> {
        self.candidates
            .choose(rng)
            .cloned()
            .ok_or(GameError::EmptyWordBank)
    }

    /// Check whether `word` may be submitted as a guess
    #[must_use]
    pub fn is_acceptable_guess(&self, word: &Word) -> bool {
        self.acceptable.contains(word)
    }

    /// Check whether `word` could have been chosen as a secret
    #[must_use]
    pub fn is_candidate(&self, word: &Word) -> bool {
        self.candidates.contains(word)
    }

    /// Candidate secrets in load order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn acceptable_count(&self) -> usize {
        self.acceptable.len()
    }
}
