//! Guess engine behaviour over a mock oracle.

mod common;

use catch_phrase::{Guess, GuessEngine, LexicalFilter};
use catch_phrase::game::GuessHistory;
use catch_phrase_lexicon::{CmuRhymes, EnglishInflector, PorterStemmer};
use common::FakeOracle;
use std::sync::Arc;

fn engine(oracle: FakeOracle) -> (GuessEngine, LexicalFilter) {
    let filter = LexicalFilter::new(
        Arc::new(PorterStemmer::new()),
        Arc::new(EnglishInflector::new()),
        Arc::new(CmuRhymes::parse(common::PRONUNCIATIONS)),
    );
    (GuessEngine::new(Arc::new(oracle), filter.clone(), 50), filter)
}

fn bag(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_dog_example_guesses_dog() {
    let (engine, _) = engine(FakeOracle::ranked(&[("dog", 0.9), ("cat", 0.5)]));
    let guess = engine.next_guess(&bag(&["puppy", "canine"]), &GuessHistory::new());
    assert_eq!(guess, Guess::Word("dog".to_string()));
}

#[test]
fn test_never_returns_guessed_or_flagged_candidates() {
    let ranking = [
        ("snowmen", 0.99),
        ("snowman", 0.98),
        ("Winter", 0.97),
        ("frost", 0.9),
        ("ice", 0.8),
        ("carrot", 0.7),
    ];
    let (engine, filter) = engine(FakeOracle::ranked(&ranking));
    let clues = bag(&["snow", "cold"]);
    let mut history = GuessHistory::new();
    history.record("winter");

    let mut produced = Vec::new();
    while let Guess::Word(word) = engine.next_guess(&clues, &history) {
        assert!(!history.contains(&word), "{} was already guessed", word);
        assert_eq!(filter.evaluate_clue(&word, &clues), None, "{} is given away", word);
        history.record(word.clone());
        produced.push(word);
    }

    assert_eq!(produced, vec!["frost", "ice", "carrot"]);
}

#[test]
fn test_exhaustion_renders_fallback() {
    let (engine, _) = engine(FakeOracle::default());
    let guess = engine.next_guess(&bag(&["anything"]), &GuessHistory::new());
    assert_eq!(guess, Guess::Exhausted);
    assert_eq!(guess.to_string(), "I'm sorry. I don't know what else to say...");
}
