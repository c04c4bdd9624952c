//! Spelling closeness between a guess and the secret word.

use tracing::instrument;

/// Default similarity at or above which a wrong guess counts as "close".
pub const DEFAULT_CLOSE_THRESHOLD: f64 = 0.75;

/// How near a guess is to the secret word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Closeness {
    /// Exactly the word.
    Exact,
    /// Off by a couple of letters; carries the similarity.
    Close(f64),
    /// Not close; carries the similarity.
    Miss(f64),
}

/// Normalized Damerau–Levenshtein similarity in `[0, 1]`; `1.0` means equal.
pub fn similarity(secret_word: &str, guess: &str) -> f64 {
    strsim::normalized_damerau_levenshtein(secret_word, guess)
}

/// Classifies `guess` against `secret_word` using `close_threshold`.
#[instrument]
pub fn closeness(secret_word: &str, guess: &str, close_threshold: f64) -> Closeness {
    let score = similarity(secret_word, guess);
    if score >= 1.0 {
        Closeness::Exact
    } else if score >= close_threshold {
        Closeness::Close(score)
    } else {
        Closeness::Miss(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(closeness("elephant", "elephant", DEFAULT_CLOSE_THRESHOLD), Closeness::Exact);
    }

    #[test]
    fn test_transposition_is_close() {
        // One adjacent swap in eight letters.
        assert!(matches!(
            closeness("elephant", "elehpant", DEFAULT_CLOSE_THRESHOLD),
            Closeness::Close(_)
        ));
    }

    #[test]
    fn test_unrelated_guess_misses() {
        assert!(matches!(
            closeness("elephant", "giraffe", DEFAULT_CLOSE_THRESHOLD),
            Closeness::Miss(_)
        ));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // "dogs" vs "dog": one edit over four letters.
        assert_eq!(similarity("dogs", "dog"), 0.75);
        assert_eq!(closeness("dogs", "dog", 0.75), Closeness::Close(0.75));
    }
}
