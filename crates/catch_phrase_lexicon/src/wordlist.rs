//! Newline-delimited word lists.

use crate::LexiconError;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument};

fn read_lines(path: &Path) -> Result<Vec<String>, LexiconError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LexiconError::new(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Loads the secret words, one per line, in file order.
///
/// Fails if the file holds no words.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, LexiconError> {
    let words = read_lines(path.as_ref())?;
    if words.is_empty() {
        return Err(LexiconError::new(format!(
            "Word list {} is empty",
            path.as_ref().display()
        )));
    }
    info!(count = words.len(), "Word list loaded");
    Ok(words)
}

/// Loads a stop-word set, one word per line.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_stop_words(path: impl AsRef<Path>) -> Result<HashSet<String>, LexiconError> {
    let words: HashSet<String> = read_lines(path.as_ref())?.into_iter().collect();
    info!(count = words.len(), "Stop words loaded");
    Ok(words)
}
