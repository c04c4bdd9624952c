//! The collaborators a game is played with, wired together.

use super::guess::GuessEngine;
use super::legality::LexicalFilter;
use super::tokenizer::Tokenizer;
use catch_phrase_lexicon::{
    DefinitionSource, PluralComparator, RhymeLookup, SimilarityOracle, Stemmer,
};
use derive_new::new;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;

/// Lexical capabilities injected into a game.
#[derive(Clone, new)]
pub struct Collaborators {
    /// Embedding nearest-neighbour search.
    pub oracle: Arc<dyn SimilarityOracle>,
    /// Stemmer for the same-root rule.
    pub stemmer: Arc<dyn Stemmer>,
    /// Singular/plural judgements.
    pub plurals: Arc<dyn PluralComparator>,
    /// Rhyme lookup.
    pub rhymes: Arc<dyn RhymeLookup>,
    /// Definition clues for the computer's turn.
    pub definitions: Arc<dyn DefinitionSource>,
    /// Words never used as clue tokens.
    pub stop_words: HashSet<String>,
}

/// Tokenizer, legality filter, guess engine and definition source for a game.
#[derive(Clone)]
pub struct Rules {
    tokenizer: Tokenizer,
    filter: LexicalFilter,
    engine: GuessEngine,
    definitions: Arc<dyn DefinitionSource>,
    close_threshold: f64,
}

impl Rules {
    /// Wires collaborators into rules.
    ///
    /// `candidates` is how many ranked neighbours the guess engine considers;
    /// `close_threshold` is the spelling similarity at which a wrong guess is
    /// reported as close.
    #[instrument(skip(collaborators))]
    pub fn new(collaborators: Collaborators, candidates: usize, close_threshold: f64) -> Self {
        let Collaborators {
            oracle,
            stemmer,
            plurals,
            rhymes,
            definitions,
            stop_words,
        } = collaborators;

        let filter = LexicalFilter::new(stemmer, plurals, rhymes);
        Self {
            tokenizer: Tokenizer::new(stop_words, oracle.clone()),
            engine: GuessEngine::new(oracle, filter.clone(), candidates),
            filter,
            definitions,
            close_threshold,
        }
    }

    /// Clue tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Legality filter.
    pub fn filter(&self) -> &LexicalFilter {
        &self.filter
    }

    /// Guess engine.
    pub fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    /// Definition source.
    pub fn definitions(&self) -> &dyn DefinitionSource {
        self.definitions.as_ref()
    }

    /// Similarity at which a wrong guess counts as close.
    pub fn close_threshold(&self) -> f64 {
        self.close_threshold
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("tokenizer", &self.tokenizer)
            .field("engine", &self.engine)
            .field("close_threshold", &self.close_threshold)
            .finish_non_exhaustive()
    }
}
