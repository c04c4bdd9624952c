//! Core domain types for catch phrase rounds.

use std::collections::HashSet;
use strum::{Display, EnumIter};

/// Which side gives the clues in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Role {
    /// The human sees the word and gives clues; the computer guesses.
    #[strum(to_string = "Your turn to give clues")]
    HumanGivesClues,
    /// The computer gives clues; the human guesses.
    #[strum(to_string = "My turn to give a clue")]
    ComputerGivesClues,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RoundOutcome {
    /// The word was guessed.
    Won,
    /// The guesser gave up on the word.
    Passed,
    /// The human quit the game.
    Quit,
    /// The round clock ran out.
    TimedOut,
}

impl RoundOutcome {
    /// Points this outcome adds to the score.
    pub fn points(self) -> u32 {
        match self {
            RoundOutcome::Won => 1,
            RoundOutcome::Passed | RoundOutcome::Quit | RoundOutcome::TimedOut => 0,
        }
    }
}

/// Ordered, append-only clue tokens accumulated during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueBag {
    tokens: Vec<String>,
}

impl ClueBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends tokens in order.
    pub fn extend(&mut self, tokens: impl IntoIterator<Item = String>) {
        self.tokens.extend(tokens);
    }

    /// Returns the tokens in insertion order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no clue has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Guesses already offered during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    guesses: HashSet<String>,
}

impl GuessHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a guess. Returns false if it was already present.
    pub fn record(&mut self, guess: impl Into<String>) -> bool {
        self.guesses.insert(guess.into())
    }

    /// Returns true if `guess` was already offered.
    pub fn contains(&self, guess: &str) -> bool {
        self.guesses.contains(guess)
    }

    /// Number of distinct guesses.
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    /// Returns true if nothing has been guessed.
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for GuessHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            guesses: iter.into_iter().map(Into::into).collect(),
        }
    }
}
