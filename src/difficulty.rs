//! Difficulty tiers and their fixed word-length/attempt budgets.

use std::{fmt, str::FromStr};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Per-tier round configuration. Read-only table, not user-editable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                word_length: 4,
                max_attempts: 6,
            },
            Difficulty::Medium => DifficultyConfig {
                word_length: 5,
                max_attempts: 6,
            },
            Difficulty::Hard => DifficultyConfig {
                word_length: 8,
                max_attempts: 8,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
