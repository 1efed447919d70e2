//! Round engine: secret, guess validation, scoring and win/loss tracking
//!
//! The engine is the single source of truth for a round. Presentation layers
//! render its [`history`](GuessEngine::history) instead of keeping their own
//! copy of what was guessed.

use super::bank::WordBank;
use super::error::{GameError, InvalidGuessReason};
use crate::core::{FeedbackPattern, Word};
use rand::Rng;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub pattern: FeedbackPattern,
}

/// Result of a finished round, handed to the statistics collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub won: bool,
    pub attempts: usize,
    pub secret: Word,
}

/// Per-round mutable state
///
/// Attempts used and status are derived from `history`, so they cannot drift
/// apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RoundState {
    history: Vec<GuessRecord>,
    unreported: Option<RoundOutcome>,
}

impl RoundState {
    fn status(&self) -> RoundStatus {
        match self.history.last() {
            Some(last) if last.pattern.is_win() => RoundStatus::Won,
            _ if self.history.len() >= MAX_ATTEMPTS => RoundStatus::Lost,
            _ => RoundStatus::InProgress,
        }
    }
}

/// Runs one round at a time against a shared [`WordBank`]
///
/// The random source is injected so rounds can be replayed from a seed.
///
/// # Examples
/// ```
/// use jordle::core::Word;
/// use jordle::game::{GuessEngine, RoundStatus, WordBank};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = |list: &[&str]| list.iter().map(|w| Word::new(w).unwrap()).collect::<Vec<_>>();
/// let bank = WordBank::new(words(&["abbey"]), words(&["babes"])).unwrap();
/// let mut engine = GuessEngine::new(&bank, StdRng::seed_from_u64(1)).unwrap();
///
/// let pattern = engine.submit_guess("BABES").unwrap();
/// assert_eq!(pattern.to_code(), "yyggi");
///
/// engine.submit_guess("abbey").unwrap();
/// assert_eq!(engine.status(), RoundStatus::Won);
/// ```
pub struct GuessEngine<'a, R: Rng> {
    bank: &'a WordBank,
    rng: R,
    secret: Word,
    round: RoundState,
}

impl<'a, R: Rng> GuessEngine<'a, R> {
    /// Start a round with a secret drawn from `bank`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyWordBank`] if the bank has no candidates.
    pub fn new(bank: &'a WordBank, mut rng: R) -> Result<Self, GameError> {
        let secret = bank.select_secret(&mut rng)?;
        log::debug!("New round started");
        log::trace!("Secret for this round: {secret}");

        Ok(Self {
            bank,
            rng,
            secret,
            round: RoundState::default(),
        })
    }

    /// Abandon the current round and start a fresh one
    ///
    /// The new secret is drawn independently and may repeat the old one. An
    /// outcome that was never taken with [`take_outcome`](Self::take_outcome)
    /// is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyWordBank`] if the bank has no candidates; the
    /// current round is left untouched in that case.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.secret = self.bank.select_secret(&mut self.rng)?;
        self.round = RoundState::default();
        log::debug!("Round reset");
        log::trace!("Secret for this round: {}", self.secret);
        Ok(())
    }

    /// Validate, score and record a guess
    ///
    /// Checks, in order: length, alphabet, dictionary membership, round still
    /// in progress. On any failure the round is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidGuess`] with the first failing check.
    pub fn submit_guess(&mut self, raw: &str) -> Result<FeedbackPattern, GameError> {
        let guess = self.validate(raw).inspect_err(|err| {
            log::debug!("Rejected guess {raw:?}: {err}");
        })?;

        let pattern = FeedbackPattern::calculate(&guess, &self.secret);
        log::debug!(
            "Guess {} of {MAX_ATTEMPTS}: {guess} -> {pattern}",
            self.round.history.len() + 1
        );
        self.round.history.push(GuessRecord { guess, pattern });

        let status = self.round.status();
        if status.is_over() {
            let outcome = RoundOutcome {
                won: status == RoundStatus::Won,
                attempts: self.round.history.len(),
                secret: self.secret.clone(),
            };
            log::info!(
                "Round {} in {} attempts",
                if outcome.won { "won" } else { "lost" },
                outcome.attempts
            );
            self.round.unreported = Some(outcome);
        }

        Ok(pattern)
    }

    fn validate(&self, raw: &str) -> Result<Word, InvalidGuessReason> {
        let guess = Word::new(raw)?;

        if !self.bank.is_acceptable_guess(&guess) {
            return Err(InvalidGuessReason::NotInDictionary);
        }

        if self.round.status().is_over() {
            return Err(InvalidGuessReason::RoundAlreadyOver);
        }

        Ok(guess)
    }

    /// The current secret
    ///
    /// Meant for revealing the answer once the round is over; not guarded.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.round.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.round.history.len()
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.round.history
    }

    /// The finished round's outcome, yielded once per terminal transition
    ///
    /// Returns `None` while the round is in progress and on every call after
    /// the first once it has ended.
    pub fn take_outcome(&mut self) -> Option<RoundOutcome> {
        self.round.unreported.take()
    }

    /// The bank this engine draws from
    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }
}
