//! Score command
//!
//! Scores a single guess against a given secret, outside of any round.

use crate::core::{FeedbackPattern, Word, WordError};

/// A guess, the secret it was scored against, and the feedback
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub pattern: FeedbackPattern,
}

/// Score `guess` against `secret`
///
/// Neither word has to be in a dictionary, only well-formed.
///
/// # Errors
///
/// Returns `WordError` if either input is not five letters.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let pattern = FeedbackPattern::calculate(&guess, &secret);

    Ok(ScoreResult {
        guess,
        secret,
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_case_insensitively() {
        let result = score_words("BABES", "Abbey").unwrap();
        assert_eq!(result.pattern.to_code(), "yyggi");
        assert_eq!(result.secret.text(), "abbey");
    }

    #[test]
    fn rejects_malformed_words() {
        assert_eq!(
            score_words("abbe", "abbey").unwrap_err(),
            WordError::InvalidLength(4)
        );
        assert_eq!(
            score_words("abbey", "ab1ey").unwrap_err(),
            WordError::NonAlphabetic
        );
    }
}
