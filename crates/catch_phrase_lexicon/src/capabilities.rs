//! Collaborator contracts.
//!
//! Every trait is `Send + Sync` so one instance can be shared behind an
//! `Arc` by the round driver and the tasks it spawns.

use crate::LexiconError;
use std::collections::HashSet;

/// Semantic nearest-neighbour search over a fixed vocabulary.
pub trait SimilarityOracle: Send + Sync {
    /// Returns up to `k` vocabulary words closest to the combined `anchors`,
    /// best first, paired with their similarity score.
    ///
    /// Anchors themselves are never returned. Anchors outside the vocabulary
    /// are ignored; if none remain the result is empty.
    fn nearest(&self, anchors: &[String], k: usize) -> Vec<(String, f32)>;

    /// Returns true if `word` is part of the vocabulary.
    fn contains(&self, word: &str) -> bool;
}

/// Deterministic stemming.
pub trait Stemmer: Send + Sync {
    /// Reduces `word` to its stem.
    fn stem(&self, word: &str) -> String;
}

/// Singular/plural judgements.
pub trait PluralComparator: Send + Sync {
    /// Returns the singular of `word`, or `None` if `word` is not a plural.
    fn singular_form(&self, word: &str) -> Option<String>;

    /// Returns true if both words are singular or both are plural.
    fn same_plurality_class(&self, a: &str, b: &str) -> bool;

    /// Returns the singular of `word`, or `word` itself when already singular.
    fn singularize(&self, word: &str) -> String {
        self.singular_form(word).unwrap_or_else(|| word.to_string())
    }
}

/// Perfect-rhyme lookup.
pub trait RhymeLookup: Send + Sync {
    /// Returns every known word that rhymes with `word`, excluding `word`.
    fn rhymes(&self, word: &str) -> HashSet<String>;
}

/// Source of definition-style clues for a word.
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Returns lowercase clue strings for `word`, with every occurrence of the
    /// word replaced by [`crate::PLACEHOLDER`].
    async fn definitions_for(&self, word: &str) -> Result<Vec<String>, LexiconError>;
}
