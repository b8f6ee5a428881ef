//! Aggregate keyboard hints derived from the full guess history.

use std::collections::HashMap;

use crate::scoring::{Feedback, Guess};

fn rank(fb: Feedback) -> u8 {
    match fb {
        Feedback::Correct => 2,
        Feedback::Present => 1,
        Feedback::Absent => 0,
    }
}

/// Computes the best feedback ever observed for each guessed letter.
///
/// Precedence is Correct > Present > Absent: once a letter has been Correct
/// anywhere, it stays Correct even if a later guess marks another occurrence
/// of it Absent. Letters never guessed are simply missing from the map.
/// Recomputed from the whole history on every call so the result can never
/// go stale against it.
pub fn key_hints(history: &[Guess]) -> HashMap<char, Feedback> {
    let mut hints: HashMap<char, Feedback> = HashMap::new();

    for guess in history {
        for (c, &fb) in guess.word.chars().zip(guess.feedback.iter()) {
            hints
                .entry(c.to_ascii_lowercase())
                .and_modify(|best| {
                    if rank(fb) > rank(*best) {
                        *best = fb;
                    }
                })
                .or_insert(fb);
        }
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_guess;

    fn guess(word: &str, target: &str) -> Guess {
        Guess::new(word.to_string(), score_guess(word, target))
    }

    #[test]
    fn test_empty_history_has_no_hints() {
        assert!(key_hints(&[]).is_empty());
    }

    #[test]
    fn test_correct_survives_earlier_absent() {
        // 'a' is Absent in the first guess, Correct in the second.
        let history = vec![guess("crane", "slate"), guess("crate", "slate")];
        let hints = key_hints(&history);

        assert_eq!(hints[&'a'], Feedback::Correct);
        assert_eq!(hints[&'t'], Feedback::Correct);
        assert_eq!(hints[&'e'], Feedback::Correct);
        assert_eq!(hints[&'c'], Feedback::Absent);
        assert_eq!(hints[&'r'], Feedback::Absent);
    }

    #[test]
    fn test_correct_survives_later_absent() {
        let history = vec![guess("crate", "slate"), guess("crane", "slate")];
        assert_eq!(key_hints(&history)[&'a'], Feedback::Correct);
    }

    #[test]
    fn test_split_verdict_in_one_guess_reports_best() {
        // Two l's in the guess, one in the target: one Correct, one Absent
        // in the same row. The key must still show Correct.
        let history = vec![guess("llama", "lemon")];
        let hints = key_hints(&history);
        assert_eq!(hints[&'l'], Feedback::Correct);
    }

    #[test]
    fn test_present_upgrades_absent_but_not_correct() {
        let history = vec![guess("reads", "slate"), guess("stale", "slate")];
        let hints = key_hints(&history);

        // 's' was Present in the first guess, Correct in the second.
        assert_eq!(hints[&'s'], Feedback::Correct);
        // 't' and 'l' were only ever Present.
        assert_eq!(hints[&'t'], Feedback::Present);
        assert_eq!(hints[&'l'], Feedback::Present);
        assert_eq!(hints[&'r'], Feedback::Absent);
        assert_eq!(hints[&'d'], Feedback::Absent);
    }

    #[test]
    fn test_unguessed_letters_missing() {
        let history = vec![guess("crane", "slate")];
        assert!(!key_hints(&history).contains_key(&'z'));
    }
}
