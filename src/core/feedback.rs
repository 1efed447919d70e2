//! Per-letter feedback and the guess scoring algorithm
//!
//! A pattern holds one [`Feedback`] symbol per guess position:
//! - `Correct`: right letter, right position (green)
//! - `Present`: letter occurs elsewhere in the secret (yellow)
//! - `Absent`: no unmatched occurrence left in the secret (gray)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Single-letter code: `g` (green), `y` (yellow), `i` (incorrect)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'i',
        }
    }

    /// Square emoji for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts `G`/🟩, `Y`/🟨 and `-`/`_`/`I`/`X`/⬜ (any letter case).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '🟩' => Some(Self::Correct),
            'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'i' | 'x' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for one guess against one secret
///
/// Produced by [`FeedbackPattern::calculate`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern([Feedback; WORD_LENGTH]);

impl FeedbackPattern {
    /// All greens
    pub const WIN: Self = Self([Feedback::Correct; WORD_LENGTH]);

    /// Build a pattern from explicit symbols
    #[must_use]
    pub const fn new(symbols: [Feedback; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Score `guess` against `secret`
    ///
    /// A guess letter is only marked `Present` as many times as the secret has
    /// occurrences of it left over after exact matches are removed, so excess
    /// duplicates in the guess come back `Absent`.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the
    ///    secret's letter tally
    /// 2. Second pass, left to right: mark `Present` while the tally for the
    ///    letter is positive (consuming it), otherwise `Absent`
    ///
    /// # Examples
    /// ```
    /// use jordle::core::{Feedback::*, FeedbackPattern, Word};
    ///
    /// let guess = Word::new("babes").unwrap();
    /// let secret = Word::new("abbey").unwrap();
    /// let pattern = FeedbackPattern::calculate(&guess, &secret);
    ///
    /// assert_eq!(pattern.symbols(), &[Present, Present, Correct, Correct, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        // Index needed to compare guess[i] with secret[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                result[i] = Feedback::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Feedback::Correct {
                continue;
            }
            let letter = guess.letter_at(i);
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The five symbols in guess order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Symbol at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    /// Count the positions marked with `feedback`
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == feedback).count()
    }

    /// Compact `g`/`y`/`i` string, e.g. `"ggggg"` for a win
    #[must_use]
    pub fn to_code(&self) -> String {
        self.0.iter().map(|f| f.code()).collect()
    }

    /// Emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use jordle::core::FeedbackPattern;
    ///
    /// let p: FeedbackPattern = "GY-GY".parse().unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl FromStr for FeedbackPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<Feedback> = s
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid pattern string: {s}"))?;

        let symbols: [Feedback; WORD_LENGTH] = symbols
            .try_into()
            .map_err(|_| format!("Pattern must have 5 symbols: {s}"))?;

        Ok(Self(symbols))
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}
