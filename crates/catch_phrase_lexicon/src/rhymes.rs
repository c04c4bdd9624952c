//! Rhyme lookup over the CMU pronouncing dictionary.
//!
//! Two words rhyme when their phones match from the last stressed vowel to
//! the end of the word.

use crate::{LexiconError, RhymeLookup};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Rhyme index built from a CMU dictionary file.
#[derive(Debug, Clone, Default)]
pub struct CmuRhymes {
    /// Rhyming parts of every pronunciation of a word.
    endings: HashMap<String, Vec<String>>,
    /// Words sharing each rhyming part.
    by_ending: HashMap<String, Vec<String>>,
}

impl CmuRhymes {
    /// Loads a dictionary in `cmudict` text format.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let content = std::fs::read(path.as_ref()).map_err(|e| {
            LexiconError::new(format!(
                "Failed to read pronouncing dictionary {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        // cmudict ships as latin-1; lossy decoding only affects comments.
        let rhymes = Self::parse(&String::from_utf8_lossy(&content));
        info!(words = rhymes.endings.len(), "Pronouncing dictionary loaded");
        Ok(rhymes)
    }

    /// Parses dictionary text: one `WORD  PH1 PH2 ...` entry per line.
    ///
    /// Comment lines (`;;;`) are skipped and alternate pronunciations such as
    /// `WORD(2)` are folded into `word`.
    pub fn parse(text: &str) -> Self {
        let mut rhymes = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(head) = fields.next() else {
                continue;
            };
            let word = head
                .split('(')
                .next()
                .unwrap_or(head)
                .to_lowercase();
            let phones: Vec<&str> = fields.collect();
            match rhyming_part(&phones) {
                Some(ending) => rhymes.insert(word, ending),
                None => debug!(word = %word, "Skipping entry without a vowel"),
            }
        }
        rhymes
    }

    fn insert(&mut self, word: String, ending: String) {
        let words = self.by_ending.entry(ending.clone()).or_default();
        if !words.contains(&word) {
            words.push(word.clone());
        }
        let endings = self.endings.entry(word).or_default();
        if !endings.contains(&ending) {
            endings.push(ending);
        }
    }

    /// Number of words in the index.
    pub fn len(&self) -> usize {
        self.endings.len()
    }

    /// Returns true if no words were loaded.
    pub fn is_empty(&self) -> bool {
        self.endings.is_empty()
    }
}

/// Phones from the last primary or secondary stressed vowel onward.
///
/// Falls back to the last vowel of any stress for unstressed words.
fn rhyming_part(phones: &[&str]) -> Option<String> {
    let is_vowel = |phone: &&str| phone.ends_with(|c: char| c.is_ascii_digit());
    let stressed = phones
        .iter()
        .rposition(|phone| phone.ends_with('1') || phone.ends_with('2'));
    let start = stressed.or_else(|| phones.iter().rposition(is_vowel))?;
    Some(phones[start..].join(" "))
}

impl RhymeLookup for CmuRhymes {
    #[instrument(skip(self))]
    fn rhymes(&self, word: &str) -> HashSet<String> {
        let word = word.to_lowercase();
        let Some(endings) = self.endings.get(&word) else {
            return HashSet::new();
        };
        endings
            .iter()
            .filter_map(|ending| self.by_ending.get(ending))
            .flatten()
            .filter(|candidate| **candidate != word)
            .cloned()
            .collect()
    }
}
