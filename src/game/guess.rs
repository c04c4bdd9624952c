//! Guess generation from accumulated clues.

use super::legality::LexicalFilter;
use super::types::GuessHistory;
use catch_phrase_lexicon::SimilarityOracle;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Number of ranked candidates requested from the oracle by default.
pub const DEFAULT_CANDIDATES: usize = 50;

/// What the engine says when no candidate survives filtering.
pub const FALLBACK_GUESS: &str = "I'm sorry. I don't know what else to say...";

/// The engine's next guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// A fresh candidate answer.
    Word(String),
    /// Every ranked candidate was illegal or already guessed.
    Exhausted,
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Word(word) => write!(f, "{}", word),
            Guess::Exhausted => write!(f, "{}", FALLBACK_GUESS),
        }
    }
}

/// Ranks candidate answers for a clue bag.
#[derive(Clone)]
pub struct GuessEngine {
    oracle: Arc<dyn SimilarityOracle>,
    filter: LexicalFilter,
    candidates: usize,
}

impl GuessEngine {
    /// Creates an engine that considers `candidates` ranked neighbours.
    pub fn new(
        oracle: Arc<dyn SimilarityOracle>,
        filter: LexicalFilter,
        candidates: usize,
    ) -> Self {
        Self {
            oracle,
            filter,
            candidates,
        }
    }

    /// Returns the best candidate for `clue_tokens` that is neither given away
    /// by the clues themselves nor already in `already_guessed`.
    #[instrument(skip(self, already_guessed), fields(guessed = already_guessed.len()))]
    pub fn next_guess(&self, clue_tokens: &[String], already_guessed: &GuessHistory) -> Guess {
        let ranked = self.oracle.nearest(clue_tokens, self.candidates);
        debug!(candidates = ranked.len(), "Oracle ranked candidates");

        for (candidate, score) in ranked {
            let candidate = candidate.to_lowercase();
            if let Some(token) = self.filter.evaluate_clue(&candidate, clue_tokens) {
                debug!(candidate = %candidate, token = %token, "Candidate given away by clue");
                continue;
            }
            if already_guessed.contains(&candidate) {
                continue;
            }
            debug!(candidate = %candidate, score, "Chose guess");
            return Guess::Word(candidate);
        }

        debug!("No candidate survived");
        Guess::Exhausted
    }
}

impl std::fmt::Debug for GuessEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuessEngine")
            .field("candidates", &self.candidates)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catch_phrase_lexicon::{CmuRhymes, EnglishInflector, PorterStemmer};

    struct Ranked(Vec<(&'static str, f32)>);

    impl SimilarityOracle for Ranked {
        fn nearest(&self, _anchors: &[String], k: usize) -> Vec<(String, f32)> {
            self.0
                .iter()
                .take(k)
                .map(|(w, s)| (w.to_string(), *s))
                .collect()
        }

        fn contains(&self, _word: &str) -> bool {
            true
        }
    }

    fn engine(ranking: Vec<(&'static str, f32)>, candidates: usize) -> GuessEngine {
        let filter = LexicalFilter::new(
            Arc::new(PorterStemmer::new()),
            Arc::new(EnglishInflector::new()),
            Arc::new(CmuRhymes::default()),
        );
        GuessEngine::new(Arc::new(Ranked(ranking)), filter, candidates)
    }

    fn clues(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_top_candidate_wins() {
        let engine = engine(vec![("dog", 0.9), ("cat", 0.5)], 2);
        let guess = engine.next_guess(&clues(&["puppy", "canine"]), &GuessHistory::new());
        assert_eq!(guess, Guess::Word("dog".to_string()));
    }

    #[test]
    fn test_candidates_are_lowercased() {
        let engine = engine(vec![("Dog", 0.9)], 5);
        let guess = engine.next_guess(&clues(&["puppy"]), &GuessHistory::new());
        assert_eq!(guess, Guess::Word("dog".to_string()));
    }

    #[test]
    fn test_skips_candidates_given_away_by_clues() {
        let engine = engine(vec![("puppies", 0.95), ("dog", 0.9)], 5);
        let guess = engine.next_guess(&clues(&["puppy"]), &GuessHistory::new());
        assert_eq!(guess, Guess::Word("dog".to_string()));
    }

    #[test]
    fn test_skips_previous_guesses() {
        let engine = engine(vec![("dog", 0.9), ("wolf", 0.8)], 5);
        let history: GuessHistory = ["dog"].into_iter().collect();
        let guess = engine.next_guess(&clues(&["canine"]), &history);
        assert_eq!(guess, Guess::Word("wolf".to_string()));
    }

    #[test]
    fn test_exhausted_when_nothing_survives() {
        let engine = engine(vec![("dog", 0.9)], 5);
        let history: GuessHistory = ["dog"].into_iter().collect();
        let guess = engine.next_guess(&clues(&["canine"]), &history);
        assert_eq!(guess, Guess::Exhausted);
        assert_eq!(guess.to_string(), FALLBACK_GUESS);
    }

    #[test]
    fn test_respects_candidate_limit() {
        let engine = engine(vec![("dog", 0.9), ("wolf", 0.8)], 1);
        let history: GuessHistory = ["dog"].into_iter().collect();
        assert_eq!(engine.next_guess(&clues(&["canine"]), &history), Guess::Exhausted);
    }
}
