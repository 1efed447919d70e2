//! Word list loading utilities
//!
//! Turns newline-delimited text (embedded or on disk) into validated words,
//! remembering which lines were skipped so they can be reported.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Words parsed from a list, plus the lines that were not valid words
#[derive(Debug, Default, Clone)]
pub struct LoadedList {
    pub words: Vec<Word>,
    /// `(line number, line text)` for every non-blank line that was skipped
    pub rejected: Vec<(usize, String)>,
}

/// Parse newline-delimited words
///
/// Blank lines are ignored; surrounding whitespace is trimmed; invalid lines
/// are collected in [`LoadedList::rejected`].
///
/// # Examples
/// ```
/// use jordle::wordlists::loader::parse_word_list;
///
/// let list = parse_word_list("Abbey\n\ncrane\nnope\n");
/// assert_eq!(list.words.len(), 2);
/// assert_eq!(list.rejected, vec![(4, "nope".to_string())]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> LoadedList {
    let mut list = LoadedList::default();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => list.words.push(word),
            Err(_) => list.rejected.push((index + 1, trimmed.to_string())),
        }
    }

    list
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<LoadedList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let list = parse_word_list(&content);

    if !list.rejected.is_empty() {
        log::warn!(
            "Skipped {} invalid lines in {}",
            list.rejected.len(),
            path.display()
        );
    }

    Ok(list)
}

/// Convert an embedded string slice to words, dropping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
