//! Session bookkeeping across rounds of one difficulty.

use crate::difficulty::Difficulty;

/// Words served per difficulty session before it completes.
pub const WORDS_PER_SESSION: usize = 20;

/// Tracks solved/played counts for a run of rounds at one difficulty.
/// In-memory only; scoring history is not persisted.
#[derive(Debug, Clone)]
pub struct Session {
    difficulty: Difficulty,
    solved: usize,
    played: usize,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            solved: 0,
            played: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn solved(&self) -> usize {
        self.solved
    }

    pub fn played(&self) -> usize {
        self.played
    }

    pub fn record_round(&mut self, won: bool) {
        self.played += 1;
        if won {
            self.solved += 1;
        }
    }

    /// True once the session's word quota has been played through.
    pub fn is_complete(&self) -> bool {
        self.played >= WORDS_PER_SESSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(Difficulty::Easy);
        assert_eq!(session.solved(), 0);
        assert_eq!(session.played(), 0);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_record_round_counts_wins() {
        let mut session = Session::new(Difficulty::Medium);
        session.record_round(true);
        session.record_round(false);
        session.record_round(true);

        assert_eq!(session.played(), 3);
        assert_eq!(session.solved(), 2);
    }

    #[test]
    fn test_completes_after_word_quota() {
        let mut session = Session::new(Difficulty::Hard);
        for _ in 0..WORDS_PER_SESSION {
            assert!(!session.is_complete());
            session.record_round(false);
        }
        assert!(session.is_complete());
    }
}
