//! Shared fakes for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use catch_phrase::{
    Collaborators, GameEvent, GameSetup, GameSession, Player, Rules, SessionSummary, TimeBudget,
    WordQueue,
};
use catch_phrase_lexicon::{
    CmuRhymes, DefinitionSource, EnglishInflector, LexiconError, PorterStemmer, SimilarityOracle,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Pronunciations for a handful of rhyming words.
pub const PRONUNCIATIONS: &str = "\
CAT  K AE1 T
HAT  HH AE1 T
BAT  B AE1 T
CATS  K AE1 T S
HATS  HH AE1 T S
DOG  D AO1 G
FOG  F AA1 G
LOG  L AO1 G
";

/// Oracle returning a fixed ranking; every word is in vocabulary unless listed.
#[derive(Debug, Clone, Default)]
pub struct FakeOracle {
    ranking: Vec<(String, f32)>,
    unknown: HashSet<String>,
}

impl FakeOracle {
    pub fn ranked(ranking: &[(&str, f32)]) -> Self {
        Self {
            ranking: ranking.iter().map(|(w, s)| (w.to_string(), *s)).collect(),
            unknown: HashSet::new(),
        }
    }

    pub fn without(mut self, words: &[&str]) -> Self {
        self.unknown.extend(words.iter().map(|w| w.to_string()));
        self
    }
}

impl SimilarityOracle for FakeOracle {
    fn nearest(&self, _anchors: &[String], k: usize) -> Vec<(String, f32)> {
        self.ranking.iter().take(k).cloned().collect()
    }

    fn contains(&self, word: &str) -> bool {
        !self.unknown.contains(word)
    }
}

/// Definitions from an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct FakeDefinitions(HashMap<String, Vec<String>>);

impl FakeDefinitions {
    pub fn with(entries: &[(&str, &[&str])]) -> Self {
        Self(
            entries
                .iter()
                .map(|(word, defs)| {
                    (
                        word.to_string(),
                        defs.iter().map(|d| d.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }
}

#[async_trait]
impl DefinitionSource for FakeDefinitions {
    async fn definitions_for(&self, word: &str) -> Result<Vec<String>, LexiconError> {
        Ok(self.0.get(word).cloned().unwrap_or_default())
    }
}

/// Definition source that is always down.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingDefinitions;

#[async_trait]
impl DefinitionSource for FailingDefinitions {
    async fn definitions_for(&self, _word: &str) -> Result<Vec<String>, LexiconError> {
        Err(LexiconError::new("service unavailable"))
    }
}

pub fn stop_words() -> HashSet<String> {
    ["a", "an", "and", "or", "the", "of", "is", "it"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

pub fn rules_with(oracle: FakeOracle, definitions: Arc<dyn DefinitionSource>) -> Rules {
    let collaborators = Collaborators::new(
        Arc::new(oracle),
        Arc::new(PorterStemmer::new()),
        Arc::new(EnglishInflector::new()),
        Arc::new(CmuRhymes::parse(PRONUNCIATIONS)),
        definitions,
        stop_words(),
    );
    Rules::new(collaborators, 50, 0.75)
}

/// Rules over the "dog" ranking with no definitions.
pub fn dog_rules() -> Rules {
    rules_with(
        FakeOracle::ranked(&[("dog", 0.9), ("cat", 0.5)]),
        Arc::new(FakeDefinitions::default()),
    )
}

pub fn setup(words: &[&str], rules: Rules, budget_secs: u64) -> GameSetup {
    let words = words.iter().map(|w| w.to_string()).collect();
    GameSetup {
        session: GameSession::new(WordQueue::new(words)),
        rules,
        budget: TimeBudget::fixed(budget_secs),
        rng: StdRng::seed_from_u64(0),
    }
}

/// Plays a whole session and returns its summary plus every event emitted.
pub async fn play(
    setup: GameSetup,
    player: impl Player + 'static,
) -> (SessionSummary, Vec<GameEvent>) {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let summary = setup
        .into_orchestrator(Box::new(player), event_tx)
        .run()
        .await
        .expect("session runs");

    let mut events = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }
    (summary, events)
}

/// Receives events until one matches, returning everything seen.
pub async fn wait_for(
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
    matches: impl Fn(&GameEvent) -> bool,
) -> Vec<GameEvent> {
    let mut seen = Vec::new();
    while let Some(event) = event_rx.recv().await {
        let done = matches(&event);
        seen.push(event);
        if done {
            return seen;
        }
    }
    panic!("event channel closed before a matching event; saw {:?}", seen);
}
