//! Clue legality rules.
//!
//! A clue token is illegal when it gives the secret word away. Three rules are
//! checked per token, in order, and the first token that breaks any of them is
//! reported:
//!
//! 1. the token and the word share a stem;
//! 2. one contains the other once both are made singular;
//! 3. both are in the same plurality class and the token rhymes with the word.

use catch_phrase_lexicon::{PluralComparator, RhymeLookup, Stemmer};
use std::sync::Arc;
use strum::Display;
use tracing::{debug, instrument};

/// Which legality rule a clue token broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Violation {
    /// Token and word share a stem.
    #[strum(to_string = "shares a root with the word")]
    SameRoot,
    /// Token and word contain one another.
    #[strum(to_string = "contains or is contained in the word")]
    Containment,
    /// Token rhymes with the word.
    #[strum(to_string = "rhymes with the word")]
    Rhyme,
}

/// The first illegal token in a clue and the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("\"{}\" {}", token, violation)]
pub struct IllegalClue {
    /// Offending token, with parentheses removed.
    pub token: String,
    /// Rule it broke.
    pub violation: Violation,
}

/// Decides whether clue tokens give a word away.
#[derive(Clone)]
pub struct LexicalFilter {
    stemmer: Arc<dyn Stemmer>,
    plurals: Arc<dyn PluralComparator>,
    rhymes: Arc<dyn RhymeLookup>,
}

impl LexicalFilter {
    /// Creates a filter from its lexical capabilities.
    pub fn new(
        stemmer: Arc<dyn Stemmer>,
        plurals: Arc<dyn PluralComparator>,
        rhymes: Arc<dyn RhymeLookup>,
    ) -> Self {
        Self {
            stemmer,
            plurals,
            rhymes,
        }
    }

    /// Returns the first token in `clue_tokens` that gives `secret_word`
    /// away, or `None` if the clue is legal.
    pub fn evaluate_clue<S: AsRef<str>>(
        &self,
        secret_word: &str,
        clue_tokens: &[S],
    ) -> Option<String> {
        self.find_violation(secret_word, clue_tokens)
            .map(|illegal| illegal.token)
    }

    /// Like [`Self::evaluate_clue`] but also names the broken rule.
    #[instrument(skip(self, clue_tokens), fields(tokens = clue_tokens.len()))]
    pub fn find_violation<S: AsRef<str>>(
        &self,
        secret_word: &str,
        clue_tokens: &[S],
    ) -> Option<IllegalClue> {
        let word = secret_word.to_lowercase();
        let word_stem = self.stemmer.stem(&word);

        for token in clue_tokens {
            let token: String = token
                .as_ref()
                .to_lowercase()
                .chars()
                .filter(|c| !matches!(c, '(' | ')'))
                .collect();
            if token.is_empty() {
                continue;
            }

            if let Some(violation) = self.check_token(&word, &word_stem, &token) {
                debug!(token = %token, %violation, "Illegal clue token");
                return Some(IllegalClue { token, violation });
            }
        }
        None
    }

    fn check_token(&self, word: &str, word_stem: &str, token: &str) -> Option<Violation> {
        if self.stemmer.stem(token) == word_stem {
            return Some(Violation::SameRoot);
        }

        let singular_token = self.plurals.singularize(token);
        let singular_word = self.plurals.singularize(word);
        if singular_word.contains(&singular_token) || singular_token.contains(&singular_word) {
            return Some(Violation::Containment);
        }

        let rhymes_either_way =
            self.rhymes.rhymes(token).contains(word) || self.rhymes.rhymes(word).contains(token);
        if self.plurals.same_plurality_class(word, token) && rhymes_either_way {
            return Some(Violation::Rhyme);
        }

        None
    }

    /// Returns the singular of `word`, or `word` when already singular.
    pub fn singular(&self, word: &str) -> String {
        self.plurals.singularize(word)
    }
}

impl std::fmt::Debug for LexicalFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalFilter").finish_non_exhaustive()
    }
}
