//! Porter-family English stemmer.

use crate::Stemmer;
use rust_stemmers::Algorithm;

/// English stemmer backed by the Snowball (Porter2) algorithm.
pub struct PorterStemmer {
    inner: rust_stemmers::Stemmer,
}

impl PorterStemmer {
    /// Creates an English stemmer.
    pub fn new() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PorterStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PorterStemmer").finish_non_exhaustive()
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}
