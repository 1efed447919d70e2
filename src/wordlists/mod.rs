//! Word lists for the game
//!
//! Embedded lists are compiled into the binary; either list can be swapped
//! for a file at startup.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::game::WordBank;
use anyhow::{Context, Result};
use loader::{LoadedList, load_from_file, words_from_slice};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-delimited file
    File(PathBuf),
}

impl WordListSource {
    /// Read the list, falling back to `embedded` for [`WordListSource::Embedded`]
    ///
    /// # Errors
    ///
    /// Returns an error if a file source cannot be read.
    pub fn load(&self, embedded: &[&str]) -> Result<LoadedList> {
        match self {
            Self::Embedded => Ok(LoadedList {
                words: words_from_slice(embedded),
                rejected: Vec::new(),
            }),
            Self::File(path) => load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display())),
        }
    }
}

impl FromStr for WordListSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for WordListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Build the word bank from a candidate-secret source and an acceptable-guess source
///
/// # Errors
///
/// Returns an error if a file cannot be read or the candidate list has no
/// valid words.
pub fn load_bank(answers: &WordListSource, allowed: &WordListSource) -> Result<WordBank> {
    let candidates = answers.load(ANSWERS)?;
    let acceptable = allowed.load(ALLOWED)?;

    WordBank::new(candidates.words, acceptable.words)
        .with_context(|| format!("No usable words in candidate list ({answers})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::collections::HashSet;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert!(Word::new(word).is_ok(), "'{word}' is not a valid word");
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed: HashSet<_> = ALLOWED.iter().collect();
        for answer in ANSWERS {
            assert!(allowed.contains(answer), "Answer '{answer}' not in allowed list");
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 679);
        assert_eq!(ALLOWED_COUNT, 1978);
    }

    #[test]
    fn data_files_match_embedded_lists() {
        for (file, embedded) in [("answers.txt", ANSWERS), ("allowed.txt", ALLOWED)] {
            let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file);
            let list = WordListSource::File(path).load(&[]).unwrap();

            assert!(list.rejected.is_empty(), "{file}: {:?}", list.rejected);
            let texts: Vec<&str> = list.words.iter().map(Word::text).collect();
            assert_eq!(texts, embedded, "{file}");
        }
    }

    #[test]
    fn source_parsing() {
        assert_eq!(
            "embedded".parse::<WordListSource>(),
            Ok(WordListSource::Embedded)
        );
        assert_eq!(
            "words.txt".parse::<WordListSource>(),
            Ok(WordListSource::File(PathBuf::from("words.txt")))
        );
    }

    #[test]
    fn embedded_bank() {
        let bank = load_bank(&WordListSource::Embedded, &WordListSource::Embedded).unwrap();
        assert_eq!(bank.candidate_count(), ANSWERS_COUNT);
        assert_eq!(bank.acceptable_count(), ALLOWED_COUNT);
        assert!(bank.is_acceptable_guess(&Word::new("abbey").unwrap()));
    }

    #[test]
    fn missing_file_source_fails() {
        let missing = WordListSource::File(PathBuf::from("/no/such/list.txt"));
        assert!(load_bank(&missing, &WordListSource::Embedded).is_err());
    }
}
