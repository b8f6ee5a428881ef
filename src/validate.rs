//! Pluggable word-validity collaborators.
//!
//! The engine never decides what counts as a real word; it asks one of these.
//! `Ok(false)` means the word was rejected, `Err` means the check itself is
//! unavailable. The engine keeps the two outcomes distinct.

use std::{collections::HashSet, time::Duration};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::wordlist::{EASY_WORDS, HARD_WORDS, MEDIUM_WORDS};

const DICTIONARY_API: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub trait WordValidator {
    fn is_valid_word(&self, word: &str) -> Result<bool>;
}

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    word: String,
}

/// Remote dictionary lookup. 200 with at least one entry means the word
/// exists, 404 means it does not, anything else is an error.
pub struct DictionaryApiValidator {
    client: reqwest::blocking::Client,
}

impl DictionaryApiValidator {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build dictionary client")?;

        Ok(Self { client })
    }
}

impl WordValidator for DictionaryApiValidator {
    fn is_valid_word(&self, word: &str) -> Result<bool> {
        let url = format!("{}/{}", DICTIONARY_API, word.to_lowercase());
        let response = self
            .client
            .get(&url)
            .send()
            .context("dictionary request failed")?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => {
                let entries: Vec<DictionaryEntry> = serde_json::from_reader(response)
                    .context("failed to decode dictionary response")?;
                Ok(entries_confirm_word(&entries))
            }
            status => Err(anyhow::anyhow!("dictionary returned {status}")),
        }
    }
}

// A 200 with an empty or hollow entry list is still a miss
fn entries_confirm_word(entries: &[DictionaryEntry]) -> bool {
    !entries.is_empty() && entries.iter().all(|e| !e.word.is_empty())
}

static LOCAL_LOOKUP: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    EASY_WORDS
        .iter()
        .chain(MEDIUM_WORDS)
        .chain(HARD_WORDS)
        .copied()
        .collect()
});

/// Offline check against the embedded word lists.
pub struct WordListValidator;

impl WordValidator for WordListValidator {
    fn is_valid_word(&self, word: &str) -> Result<bool> {
        Ok(LOCAL_LOOKUP.contains(word.to_lowercase().as_str()))
    }
}
