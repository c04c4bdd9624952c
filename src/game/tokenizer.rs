//! Clue text normalization.

use catch_phrase_lexicon::{PLACEHOLDER_TOKEN, SimilarityOracle};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Turns raw clue text into clue tokens.
///
/// Lowercases, strips everything but alphanumerics and whitespace, splits on
/// whitespace, then drops stop words, the definition placeholder and words
/// the similarity oracle does not know.
#[derive(Clone)]
pub struct Tokenizer {
    stop_words: Arc<HashSet<String>>,
    oracle: Arc<dyn SimilarityOracle>,
}

impl Tokenizer {
    /// Creates a tokenizer over a stop-word set and an oracle vocabulary.
    pub fn new(stop_words: HashSet<String>, oracle: Arc<dyn SimilarityOracle>) -> Self {
        Self {
            stop_words: Arc::new(stop_words),
            oracle,
        }
    }

    /// Returns the clue tokens found in `raw`, in order.
    #[instrument(skip(self))]
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        let cleaned: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        let tokens: Vec<String> = cleaned
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(*token))
            .filter(|token| *token != PLACEHOLDER_TOKEN)
            .filter(|token| self.oracle.contains(token))
            .map(str::to_string)
            .collect();

        debug!(?tokens, "Tokenized clue");
        tokens
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Vocabulary(HashSet<&'static str>);

    impl SimilarityOracle for Vocabulary {
        fn nearest(&self, _anchors: &[String], _k: usize) -> Vec<(String, f32)> {
            Vec::new()
        }

        fn contains(&self, word: &str) -> bool {
            self.0.contains(word)
        }
    }

    fn tokenizer() -> Tokenizer {
        let vocabulary = Vocabulary(
            ["blank", "furry", "pet", "barks", "loud", "the", "c3po"]
                .into_iter()
                .collect(),
        );
        Tokenizer::new(
            ["the", "a"].into_iter().map(String::from).collect(),
            Arc::new(vocabulary),
        )
    }

    #[test]
    fn test_strips_punctuation_and_case() {
        assert_eq!(tokenizer().tokenize("Furry PET, barks!"), ["furry", "pet", "barks"]);
    }

    #[test]
    fn test_drops_stop_words_and_placeholder() {
        assert_eq!(
            tokenizer().tokenize("a <blank> that barks the loudest... loud"),
            ["barks", "loud"]
        );
    }

    #[test]
    fn test_drops_out_of_vocabulary() {
        assert!(tokenizer().tokenize("zebra giraffe").is_empty());
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(tokenizer().tokenize("c-3po"), ["c3po"]);
    }

    #[test]
    fn test_whitespace_only_yields_nothing() {
        assert!(tokenizer().tokenize("   \t ").is_empty());
    }
}
