//! Per-letter guess feedback with duplicate-letter multiplicity handling.

use std::collections::HashMap;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Present,
    Absent,
}

#[derive(Debug, Clone)]
pub struct Guess {
    pub word: String,
    pub feedback: Vec<Feedback>,
}

impl Guess {
    pub fn new(word: String, feedback: Vec<Feedback>) -> Self {
        Self { word, feedback }
    }

    pub fn is_winning(&self) -> bool {
        self.feedback.iter().all(|&fb| fb == Feedback::Correct)
    }
}

/// Scores `guess` against `target` position by position.
///
/// Two passes over a multiset of target letters: exact matches consume their
/// letter first, then remaining copies are handed out as Present in guess
/// order. A letter never earns more Correct+Present marks than it has
/// occurrences in the target. Both words must have the same length; the
/// engine enforces that before calling.
pub fn score_guess(guess: &str, target: &str) -> Vec<Feedback> {
    let g: Vec<char> = guess.chars().collect();
    let t: Vec<char> = target.chars().collect();
    debug_assert_eq!(g.len(), t.len());

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &c in &t {
        *remaining.entry(c).or_insert(0) += 1;
    }

    let mut feedback = vec![Feedback::Absent; g.len()];

    // Exact-match pass
    for i in 0..g.len() {
        if g[i] == t[i] {
            feedback[i] = Feedback::Correct;
            *remaining.get_mut(&g[i]).unwrap() -= 1;
        }
    }

    // Presence pass over the positions the first pass left untouched
    for i in 0..g.len() {
        if feedback[i] == Feedback::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g[i]) {
            if *count > 0 {
                feedback[i] = Feedback::Present;
                *count -= 1;
            }
        }
    }

    feedback
}
