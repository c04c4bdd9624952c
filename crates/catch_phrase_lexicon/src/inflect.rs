//! Rule-based English noun inflection.

use crate::PluralComparator;
use std::collections::HashMap;
use tracing::instrument;

/// Irregular plurals and their singulars.
const IRREGULAR: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("people", "person"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("calves", "calf"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("scarves", "scarf"),
    ("elves", "elf"),
    ("selves", "self"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("heroes", "hero"),
    ("echoes", "echo"),
    ("volcanoes", "volcano"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("pies", "pie"),
    ("ties", "tie"),
    ("lies", "lie"),
    ("zombies", "zombie"),
    ("brownies", "brownie"),
];

/// Words spelled the same in both numbers. Treated as singular.
const UNINFLECTED: &[&str] = &[
    "sheep", "fish", "deer", "series", "species", "moose", "salmon", "trout", "aircraft",
    "swine", "bison", "news", "means",
];

/// Endings of singular nouns that merely look plural.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ous", "ics"];

/// Plural-to-singular conversion using suffix rules and an irregular table.
#[derive(Debug, Clone)]
pub struct EnglishInflector {
    irregular: HashMap<&'static str, &'static str>,
}

impl EnglishInflector {
    /// Creates an inflector with the built-in irregular table.
    pub fn new() -> Self {
        Self {
            irregular: IRREGULAR.iter().copied().collect(),
        }
    }

    /// Returns true if `word` reads as a plural noun.
    pub fn is_plural(&self, word: &str) -> bool {
        self.singular_form(word).is_some()
    }

    fn strip_suffix_rules(word: &str) -> Option<String> {
        if word.len() <= 3 || SINGULAR_ENDINGS.iter().any(|end| word.ends_with(end)) {
            return None;
        }
        if let Some(stem) = word.strip_suffix("ies") {
            return Some(format!("{stem}y"));
        }
        for sibilant in ["sses", "xes", "ches", "shes", "zzes"] {
            if word.ends_with(sibilant) {
                return Some(word[..word.len() - 2].to_string());
            }
        }
        word.strip_suffix('s').map(str::to_string)
    }
}

impl Default for EnglishInflector {
    fn default() -> Self {
        Self::new()
    }
}

impl PluralComparator for EnglishInflector {
    #[instrument(skip(self))]
    fn singular_form(&self, word: &str) -> Option<String> {
        let word = word.to_lowercase();
        if let Some(singular) = self.irregular.get(word.as_str()) {
            return Some((*singular).to_string());
        }
        if UNINFLECTED.contains(&word.as_str()) || self.irregular.values().any(|s| *s == word) {
            return None;
        }
        Self::strip_suffix_rules(&word)
    }

    fn same_plurality_class(&self, a: &str, b: &str) -> bool {
        self.is_plural(a) == self.is_plural(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let inflector = EnglishInflector::new();
        assert_eq!(inflector.singular_form("cats"), Some("cat".to_string()));
        assert_eq!(inflector.singular_form("boxes"), Some("box".to_string()));
        assert_eq!(inflector.singular_form("churches"), Some("church".to_string()));
        assert_eq!(inflector.singular_form("cities"), Some("city".to_string()));
        assert_eq!(inflector.singular_form("glasses"), Some("glass".to_string()));
    }

    #[test]
    fn test_irregular_plurals() {
        let inflector = EnglishInflector::new();
        assert_eq!(inflector.singular_form("mice"), Some("mouse".to_string()));
        assert_eq!(inflector.singular_form("wolves"), Some("wolf".to_string()));
        assert_eq!(inflector.singular_form("movies"), Some("movie".to_string()));
    }

    #[test]
    fn test_singulars_have_no_singular_form() {
        let inflector = EnglishInflector::new();
        for word in ["cat", "glass", "bus", "analysis", "sheep", "mouse", "dog"] {
            assert_eq!(inflector.singular_form(word), None, "{word}");
        }
    }

    #[test]
    fn test_singularize_falls_back_to_word() {
        let inflector = EnglishInflector::new();
        assert_eq!(inflector.singularize("dogs"), "dog");
        assert_eq!(inflector.singularize("dog"), "dog");
    }

    #[test]
    fn test_plurality_class() {
        let inflector = EnglishInflector::new();
        assert!(inflector.same_plurality_class("cat", "hat"));
        assert!(inflector.same_plurality_class("cats", "hats"));
        assert!(!inflector.same_plurality_class("cat", "hats"));
        assert!(!inflector.same_plurality_class("mice", "house"));
    }
}
