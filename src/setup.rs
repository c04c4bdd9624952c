//! Loads lexical resources named by a [`GameConfig`] into a [`GameSetup`].

use crate::clock::TimeBudget;
use crate::config::{DefinitionsConfig, GameConfig};
use crate::game::{Collaborators, Rules};
use crate::orchestrator::GameSetup;
use crate::session::{GameSession, WordQueue};
use anyhow::{Context, Result};
use catch_phrase_lexicon::{
    BabelNetSource, CmuRhymes, DefinitionSource, EnglishInflector, PorterStemmer, TomlDefinitions,
    WordVectors, load_stop_words, load_word_list,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{info, instrument};

/// Builds the definition source the config asks for.
#[instrument(skip(config))]
pub fn definition_source(config: &DefinitionsConfig) -> Result<Arc<dyn DefinitionSource>> {
    let source: Arc<dyn DefinitionSource> = match config {
        DefinitionsConfig::BabelNet { base_url } => Arc::new(BabelNetSource::new(base_url)),
        DefinitionsConfig::File { path } => Arc::new(
            TomlDefinitions::from_file(path)
                .with_context(|| format!("Loading definitions from {}", path.display()))?,
        ),
    };
    Ok(source)
}

/// Loads every resource and shuffles the word queue.
///
/// A `seed` makes the word order and round budgets reproducible.
#[instrument(skip(config))]
pub fn build_setup(config: &GameConfig, seed: Option<u64>) -> Result<GameSetup> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let words = load_word_list(config.words_path())
        .with_context(|| format!("Loading words from {}", config.words_path().display()))?;
    let stop_words = load_stop_words(config.stop_words_path()).with_context(|| {
        format!(
            "Loading stop words from {}",
            config.stop_words_path().display()
        )
    })?;
    let vectors = WordVectors::from_file(config.vectors_path(), *config.vector_limit())
        .with_context(|| format!("Loading vectors from {}", config.vectors_path().display()))?;
    let rhymes = CmuRhymes::from_file(config.cmudict_path()).with_context(|| {
        format!(
            "Loading pronunciations from {}",
            config.cmudict_path().display()
        )
    })?;
    info!(
        words = words.len(),
        stop_words = stop_words.len(),
        vectors = vectors.len(),
        pronunciations = rhymes.len(),
        "Loaded lexical resources"
    );

    let collaborators = Collaborators::new(
        Arc::new(vectors),
        Arc::new(PorterStemmer::new()),
        Arc::new(EnglishInflector::new()),
        Arc::new(rhymes),
        definition_source(config.definitions())?,
        stop_words,
    );
    let rules = Rules::new(
        collaborators,
        *config.candidate_count(),
        *config.close_threshold(),
    );
    let session = GameSession::new(WordQueue::shuffled(words, &mut rng));

    Ok(GameSetup {
        session,
        rules,
        budget: TimeBudget::new(*config.min_budget_secs(), *config.max_budget_secs()),
        rng,
    })
}
