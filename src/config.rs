//! Game configuration loaded from TOML.

use crate::game::{DEFAULT_CANDIDATES, DEFAULT_CLOSE_THRESHOLD};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where definition clues come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DefinitionsConfig {
    /// Scrape the BabelNet search page.
    BabelNet {
        /// Site root, e.g. `https://babelnet.org`.
        base_url: String,
    },
    /// Read a local `[definitions]` TOML table.
    File {
        /// Path to the TOML file.
        path: PathBuf,
    },
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        DefinitionsConfig::BabelNet {
            base_url: "https://babelnet.org".to_string(),
        }
    }
}

/// Resource paths and tuning for a game.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Newline-delimited secret words.
    #[serde(default = "default_words_path")]
    words_path: PathBuf,

    /// Newline-delimited stop words.
    #[serde(default = "default_stop_words_path")]
    stop_words_path: PathBuf,

    /// Word vectors in word2vec text format.
    #[serde(default = "default_vectors_path")]
    vectors_path: PathBuf,

    /// Maximum number of vectors to load.
    #[serde(default = "default_vector_limit")]
    vector_limit: usize,

    /// CMU pronouncing dictionary.
    #[serde(default = "default_cmudict_path")]
    cmudict_path: PathBuf,

    /// Definition clue source.
    #[serde(default)]
    definitions: DefinitionsConfig,

    /// Ranked neighbours the guess engine considers.
    #[serde(default = "default_candidate_count")]
    candidate_count: usize,

    /// Shortest round budget in seconds.
    #[serde(default = "default_min_budget_secs")]
    min_budget_secs: u64,

    /// Longest round budget in seconds.
    #[serde(default = "default_max_budget_secs")]
    max_budget_secs: u64,

    /// Spelling similarity at which a wrong guess is "close".
    #[serde(default = "default_close_threshold")]
    close_threshold: f64,
}

fn default_words_path() -> PathBuf {
    PathBuf::from("data/words.txt")
}

fn default_stop_words_path() -> PathBuf {
    PathBuf::from("data/stop_words.txt")
}

fn default_vectors_path() -> PathBuf {
    PathBuf::from("data/vectors.txt")
}

fn default_vector_limit() -> usize {
    200_000
}

fn default_cmudict_path() -> PathBuf {
    PathBuf::from("data/cmudict.dict")
}

fn default_candidate_count() -> usize {
    DEFAULT_CANDIDATES
}

fn default_min_budget_secs() -> u64 {
    60
}

fn default_max_budget_secs() -> u64 {
    99
}

fn default_close_threshold() -> f64 {
    DEFAULT_CLOSE_THRESHOLD
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words_path: default_words_path(),
            stop_words_path: default_stop_words_path(),
            vectors_path: default_vectors_path(),
            vector_limit: default_vector_limit(),
            cmudict_path: default_cmudict_path(),
            definitions: DefinitionsConfig::default(),
            candidate_count: default_candidate_count(),
            min_budget_secs: default_min_budget_secs(),
            max_budget_secs: default_max_budget_secs(),
            close_threshold: default_close_threshold(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values are usable together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_budget_secs == 0 {
            return Err(ConfigError::new("min_budget_secs must be positive"));
        }
        if self.min_budget_secs > self.max_budget_secs {
            return Err(ConfigError::new(format!(
                "min_budget_secs ({}) exceeds max_budget_secs ({})",
                self.min_budget_secs, self.max_budget_secs
            )));
        }
        if self.candidate_count == 0 {
            return Err(ConfigError::new("candidate_count must be positive"));
        }
        if !(0.0..=1.0).contains(&self.close_threshold) {
            return Err(ConfigError::new(format!(
                "close_threshold ({}) must be within [0, 1]",
                self.close_threshold
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = GameConfig::parse("").expect("defaults");
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.min_budget_secs(), 60);
        assert_eq!(*config.max_budget_secs(), 99);
        assert_eq!(*config.candidate_count(), 50);
    }

    #[test]
    fn test_file_definitions_source() {
        let config = GameConfig::parse(
            r#"
min_budget_secs = 30
max_budget_secs = 45

[definitions]
source = "file"
path = "data/definitions.toml"
"#,
        )
        .expect("valid config");
        assert_eq!(
            config.definitions(),
            &DefinitionsConfig::File {
                path: PathBuf::from("data/definitions.toml")
            }
        );
        assert_eq!(*config.min_budget_secs(), 30);
    }

    #[test]
    fn test_inverted_budget_is_rejected() {
        let err = GameConfig::parse("min_budget_secs = 90\nmax_budget_secs = 60").unwrap_err();
        assert!(err.message.contains("exceeds"));
    }

    #[test]
    fn test_threshold_out_of_range_is_rejected() {
        assert!(GameConfig::parse("close_threshold = 1.5").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, GameConfig::default());
    }
}
