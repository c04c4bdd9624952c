//! Lexical capabilities consumed by the catch phrase game core.
//!
//! The game treats stemming, inflection, rhymes, semantic similarity and
//! definition lookup as black boxes with a fixed contract. This crate defines
//! those contracts as traits and ships one concrete implementation of each so
//! the game is playable out of the box.
//!
//! # Capabilities
//!
//! - [`SimilarityOracle`]: nearest neighbours in an embedding space ([`WordVectors`])
//! - [`Stemmer`]: deterministic word stemming ([`PorterStemmer`])
//! - [`PluralComparator`]: singular forms and plurality classes ([`EnglishInflector`])
//! - [`RhymeLookup`]: perfect rhymes ([`CmuRhymes`])
//! - [`DefinitionSource`]: masked definition clues ([`BabelNetSource`], [`TomlDefinitions`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod capabilities;
mod definitions;
mod error;
mod inflect;
mod rhymes;
mod stemmer;
mod vectors;
mod wordlist;

pub use capabilities::{
    DefinitionSource, PluralComparator, RhymeLookup, SimilarityOracle, Stemmer,
};
pub use definitions::{
    BabelNetSource, PLACEHOLDER, PLACEHOLDER_TOKEN, TomlDefinitions, extract_definitions,
    mask_word,
};
pub use error::LexiconError;
pub use inflect::EnglishInflector;
pub use rhymes::CmuRhymes;
pub use stemmer::PorterStemmer;
pub use vectors::WordVectors;
pub use wordlist::{load_stop_words, load_word_list};
