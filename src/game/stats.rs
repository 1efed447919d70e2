//! Session statistics
//!
//! Fed one [`RoundOutcome`] per finished round. Nothing here touches disk.

use super::engine::{MAX_ATTEMPTS, RoundOutcome};

/// Running win/loss record for the session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of attempts; index 0 is a first-try win
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl Statistics {
    /// Fold a finished round into the totals
    ///
    /// A win extends the current streak; a loss ends it.
    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.total_games += 1;

        if outcome.won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if let Some(slot) = outcome
                .attempts
                .checked_sub(1)
                .and_then(|i| self.guess_distribution.get_mut(i))
            {
                *slot += 1;
            }
        } else {
            self.current_streak = 0;
        }

        log::debug!(
            "Statistics: {}/{} won, streak {} (max {})",
            self.games_won,
            self.total_games,
            self.current_streak,
            self.max_streak
        );
    }

    #[must_use]
    pub const fn games_lost(&self) -> usize {
        self.total_games - self.games_won
    }

    /// Percentage of games won, 0.0 before any game is played
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn outcome(won: bool, attempts: usize) -> RoundOutcome {
        RoundOutcome {
            won,
            attempts,
            secret: Word::new("abbey").unwrap(),
        }
    }

    #[test]
    fn starts_empty() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn wins_build_streaks() {
        let mut stats = Statistics::default();
        stats.record(&outcome(true, 3));
        stats.record(&outcome(true, 4));

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, [0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn loss_resets_current_streak_only() {
        let mut stats = Statistics::default();
        stats.record(&outcome(true, 1));
        stats.record(&outcome(true, 6));
        stats.record(&outcome(false, 6));
        stats.record(&outcome(true, 2));

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.games_lost(), 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, [1, 1, 0, 0, 0, 1]);
        assert!((stats.win_percentage() - 75.0).abs() < 1e-9);
    }
}
