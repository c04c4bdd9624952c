//! Lexicon error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised while loading or querying a lexical resource.
#[derive(Debug, Clone, Display, Error)]
#[display("Lexicon error: {} at {}:{}", message, file, line)]
pub struct LexiconError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LexiconError {
    /// Creates a new lexicon error with caller location tracking.
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

impl From<std::io::Error> for LexiconError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<reqwest::Error> for LexiconError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}
