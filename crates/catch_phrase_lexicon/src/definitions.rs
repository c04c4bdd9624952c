//! Definition-style clue sources.

use crate::{DefinitionSource, LexiconError};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, instrument, warn};

/// Text substituted for the secret word inside a definition.
pub const PLACEHOLDER: &str = "<blank>";

/// The placeholder as it survives tokenization (punctuation stripped).
pub const PLACEHOLDER_TOKEN: &str = "blank";

static DEFINITION_DIV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div[^>]*class="definition"[^>]*>(.*?)</div>"#).expect("valid regex")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Lowercases `text` and replaces every occurrence of `word` with [`PLACEHOLDER`].
pub fn mask_word(text: &str, word: &str) -> String {
    let text = text.trim().to_lowercase();
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return text;
    }
    text.replace(&word, PLACEHOLDER)
}

/// Pulls the text of every `<div class="definition">` out of a search page.
pub fn extract_definitions(html: &str) -> Vec<String> {
    DEFINITION_DIV
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|inner| {
            let text = TAG.replace_all(inner.as_str(), "");
            html_escape::decode_html_entities(&text).into_owned()
        })
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Scrapes definitions from the BabelNet search page.
#[derive(Debug, Clone)]
pub struct BabelNetSource {
    client: reqwest::Client,
    base_url: String,
}

impl BabelNetSource {
    /// Creates a source querying `base_url` (e.g. `https://babelnet.org`).
    #[instrument(skip(base_url), fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl DefinitionSource for BabelNetSource {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn definitions_for(&self, word: &str) -> Result<Vec<String>, LexiconError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[("word", word), ("lang", "EN")],
        )
        .map_err(|e| LexiconError::new(format!("Invalid definition URL: {}", e)))?;
        debug!(url = %url, "Requesting definitions");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Definition lookup failed");
            return Err(LexiconError::new(format!(
                "Definition lookup for '{}' returned {}",
                word, status
            )));
        }

        let page = response.text().await?;
        let definitions: Vec<String> = extract_definitions(&page)
            .iter()
            .map(|text| mask_word(text, word))
            .collect();
        info!(count = definitions.len(), "Definitions scraped");
        Ok(definitions)
    }
}

#[derive(Debug, Deserialize)]
struct DefinitionsFile {
    #[serde(default)]
    definitions: HashMap<String, Vec<String>>,
}

/// Definitions read from a TOML file for offline play.
///
/// ```toml
/// [definitions]
/// dog = ["a domesticated carnivorous mammal", "a dull unattractive dog of a person"]
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlDefinitions {
    definitions: HashMap<String, Vec<String>>,
}

impl TomlDefinitions {
    /// Loads definitions from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            LexiconError::new(format!("Failed to read definitions file: {}", e))
        })?;
        let source = Self::parse(&content)?;
        info!(words = source.definitions.len(), "Definitions file loaded");
        Ok(source)
    }

    /// Parses definitions from TOML text.
    pub fn parse(content: &str) -> Result<Self, LexiconError> {
        let file: DefinitionsFile = toml::from_str(content)
            .map_err(|e| LexiconError::new(format!("Failed to parse definitions: {}", e)))?;
        let definitions = file
            .definitions
            .into_iter()
            .map(|(word, texts)| (word.to_lowercase(), texts))
            .collect();
        Ok(Self { definitions })
    }
}

#[async_trait::async_trait]
impl DefinitionSource for TomlDefinitions {
    async fn definitions_for(&self, word: &str) -> Result<Vec<String>, LexiconError> {
        let word = word.to_lowercase();
        Ok(self
            .definitions
            .get(&word)
            .map(|texts| texts.iter().map(|text| mask_word(text, &word)).collect())
            .unwrap_or_default())
    }
}
