//! Word list audit
//!
//! Validates a pair of word lists before they are used for play and runs the
//! scorer over them as a sanity check:
//! - every candidate scored against itself must be a win
//! - for every scored pair, no letter may be matched (green or yellow) more
//!   times than it occurs in the secret

use crate::core::{Feedback, FeedbackPattern, WORD_LENGTH, Word};
use crate::wordlists::loader::LoadedList;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Findings of a word list check
#[derive(Debug, Default)]
pub struct CheckReport {
    pub answer_count: usize,
    pub allowed_count: usize,
    pub pairs_checked: usize,
    pub rejected_answers: Vec<String>,
    pub rejected_allowed: Vec<String>,
    pub duplicate_answers: Vec<String>,
    pub duplicate_allowed: Vec<String>,
    pub answers_not_allowed: Vec<String>,
    pub scorer_violations: Vec<String>,
}

impl CheckReport {
    /// Total number of findings
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.rejected_answers.len()
            + self.rejected_allowed.len()
            + self.duplicate_answers.len()
            + self.duplicate_allowed.len()
            + self.answers_not_allowed.len()
            + self.scorer_violations.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}

/// Audit `answers` (candidate secrets) and `allowed` (acceptable guesses)
///
/// Each candidate is scored against itself and against the first `probes`
/// acceptable guesses. Candidates missing from the guess list are reported
/// even though the word bank accepts them anyway.
#[must_use]
pub fn check_word_lists(
    answers: &LoadedList,
    allowed: &LoadedList,
    probes: usize,
    show_progress: bool,
) -> CheckReport {
    let allowed_set: FxHashSet<&Word> = allowed.words.iter().collect();

    let answers_not_allowed: Vec<String> = answers
        .words
        .par_iter()
        .filter(|word| !allowed_set.contains(word))
        .map(|word| word.text().to_string())
        .collect();

    let probe_words: Vec<&Word> = allowed.words.iter().take(probes).collect();

    let pb = if show_progress {
        ProgressBar::new(answers.words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb.set_message("scoring");

    let mut scorer_violations: Vec<String> = answers
        .words
        .par_iter()
        .flat_map_iter(|secret| {
            let mut found = Vec::new();
            if !FeedbackPattern::calculate(secret, secret).is_win() {
                found.push(format!("{secret} does not match itself"));
            }
            for &guess in &probe_words {
                if !conserves_letters(guess, secret) {
                    found.push(format!("{guess} vs {secret} over-matches a letter"));
                }
            }
            pb.inc(1);
            found
        })
        .collect();
    scorer_violations.sort();
    pb.finish_with_message("done");

    let report = CheckReport {
        answer_count: answers.words.len(),
        allowed_count: allowed.words.len(),
        pairs_checked: answers.words.len() * (probe_words.len() + 1),
        rejected_answers: describe_rejected(answers),
        rejected_allowed: describe_rejected(allowed),
        duplicate_answers: duplicates(&answers.words),
        duplicate_allowed: duplicates(&allowed.words),
        answers_not_allowed,
        scorer_violations,
    };

    log::info!(
        "Checked {} candidates and {} guesses: {} issues",
        report.answer_count,
        report.allowed_count,
        report.issue_count()
    );

    report
}

/// True if no letter of `guess` is matched more often than it occurs in `secret`
fn conserves_letters(guess: &Word, secret: &Word) -> bool {
    let pattern = FeedbackPattern::calculate(guess, secret);
    let mut matched: FxHashMap<u8, usize> = FxHashMap::default();

    for i in 0..WORD_LENGTH {
        if pattern.at(i) != Feedback::Absent {
            *matched.entry(guess.letter_at(i)).or_insert(0) += 1;
        }
    }

    matched
        .into_iter()
        .all(|(letter, count)| count <= secret.count_of(letter))
}

fn describe_rejected(list: &LoadedList) -> Vec<String> {
    list.rejected
        .iter()
        .map(|(line, text)| format!("line {line}: {text:?}"))
        .collect()
}

fn duplicates(words: &[Word]) -> Vec<String> {
    let mut counts: FxHashMap<&Word, usize> = FxHashMap::default();
    for word in words {
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut repeated: Vec<String> = counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(word, count)| format!("{word} (x{count})"))
        .collect();
    repeated.sort();
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::parse_word_list;
    use crate::wordlists::{ALLOWED, ANSWERS, WordListSource};

    #[test]
    fn clean_lists() {
        let answers = parse_word_list("abbey\ncrane\n");
        let allowed = parse_word_list("abbey\ncrane\nbabes\nslate\n");

        let report = check_word_lists(&answers, &allowed, 10, false);

        assert!(report.is_clean(), "{report:?}");
        assert_eq!(report.answer_count, 2);
        assert_eq!(report.allowed_count, 4);
        assert_eq!(report.pairs_checked, 2 * 5);
    }

    #[test]
    fn finds_problems() {
        let answers = parse_word_list("abbey\nabbey\nzebra\nab1ey\n");
        let allowed = parse_word_list("abbey\ncrane\ncrane\ntoolong\n");

        let report = check_word_lists(&answers, &allowed, 2, false);

        assert_eq!(report.rejected_answers, ["line 4: \"ab1ey\""]);
        assert_eq!(report.rejected_allowed, ["line 4: \"toolong\""]);
        assert_eq!(report.duplicate_answers, ["abbey (x2)"]);
        assert_eq!(report.duplicate_allowed, ["crane (x2)"]);
        assert_eq!(report.answers_not_allowed, ["zebra"]);
        assert!(report.scorer_violations.is_empty());
        assert_eq!(report.issue_count(), 5);
    }

    #[test]
    fn embedded_lists_are_clean() {
        let answers = WordListSource::Embedded.load(ANSWERS).unwrap();
        let allowed = WordListSource::Embedded.load(ALLOWED).unwrap();

        let report = check_word_lists(&answers, &allowed, 32, false);

        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn conservation_holds_for_duplicates() {
        let guess = Word::new("eerie").unwrap();
        let secret = Word::new("abbey").unwrap();
        assert!(conserves_letters(&guess, &secret));
    }
}
