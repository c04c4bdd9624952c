//! Round state machines.
//!
//! Each round is a pure transition function from one line of player input to
//! a reply. Clocks, prompts and rendering live in the orchestrator.

use super::guess::Guess;
use super::invariants::{HumanRoundInvariants, InvariantSet};
use super::legality::IllegalClue;
use super::rules::Rules;
use super::similarity::{Closeness, closeness};
use super::types::{ClueBag, GuessHistory, RoundOutcome};
use tracing::{debug, instrument};

/// Clue shown once the computer has nothing left to say.
pub const OUT_OF_CLUES: &str = "I'm out of clues!";

/// Where a clue-giving round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for a clue.
    AwaitingClueInput,
    /// A guess is on the table; waiting for y/n/s or another clue.
    AwaitingFeedback,
    /// Waiting for the human's guess at the computer's clue.
    AwaitingGuessInput,
    /// The round is over.
    Finished(RoundOutcome),
}

/// Single-letter commands typed in place of a clue or guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `y`: the guess is right.
    Yes,
    /// `n`: the guess is wrong, or pass on the word.
    No,
    /// `s`: try the singular of the last guess.
    Singular,
    /// `q`: give up the round.
    Quit,
}

impl Command {
    /// Parses a trimmed, case-insensitive command letter.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" => Some(Command::Yes),
            "n" => Some(Command::No),
            "s" => Some(Command::Singular),
            "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// The computer's answer to a line typed while the human gives clues.
#[derive(Debug, Clone, PartialEq)]
pub enum ClueReply {
    /// A new guess, or the fallback line when nothing is left.
    Guess(Guess),
    /// The clue gave the word away.
    Illegal(IllegalClue),
    /// The clue had no usable words.
    InvalidClue,
    /// `y`, `n` or `s` before any guess was made.
    NoGuessYet,
    /// The guess was rejected; awaiting another clue.
    GuessRejected,
    /// The round ended.
    Finished(RoundOutcome),
}

/// Round where the human describes the word and the computer guesses.
#[derive(Debug, Clone)]
pub struct HumanCluesRound {
    secret_word: String,
    clues: ClueBag,
    history: GuessHistory,
    current_guess: Option<String>,
    phase: RoundPhase,
}

impl HumanCluesRound {
    /// Starts a round for `secret_word`.
    pub fn new(secret_word: impl Into<String>) -> Self {
        Self {
            secret_word: secret_word.into().to_lowercase(),
            clues: ClueBag::new(),
            history: GuessHistory::new(),
            current_guess: None,
            phase: RoundPhase::AwaitingClueInput,
        }
    }

    /// The word being described.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Tokens accepted so far.
    pub fn clues(&self) -> &ClueBag {
        &self.clues
    }

    /// Every word the computer has proposed.
    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// The guess awaiting feedback, if any.
    pub fn current_guess(&self) -> Option<&str> {
        self.current_guess.as_deref()
    }

    /// Current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Outcome once finished.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Ends the round without reading more input.
    pub fn finish(&mut self, outcome: RoundOutcome) {
        self.phase = RoundPhase::Finished(outcome);
    }

    /// Applies one line of input.
    #[instrument(skip(self, rules), fields(word = %self.secret_word, phase = ?self.phase))]
    pub fn respond(&mut self, input: &str, rules: &Rules) -> ClueReply {
        if let RoundPhase::Finished(outcome) = self.phase {
            return ClueReply::Finished(outcome);
        }

        let input = input.trim().to_lowercase();
        let reply = match Command::parse(&input) {
            Some(Command::Quit) => {
                self.finish(RoundOutcome::Quit);
                ClueReply::Finished(RoundOutcome::Quit)
            }
            Some(Command::Yes) => {
                if self.current_guess.is_some() {
                    self.finish(RoundOutcome::Won);
                    ClueReply::Finished(RoundOutcome::Won)
                } else {
                    ClueReply::NoGuessYet
                }
            }
            Some(Command::No) => {
                if self.current_guess.take().is_some() {
                    self.phase = RoundPhase::AwaitingClueInput;
                    ClueReply::GuessRejected
                } else {
                    ClueReply::NoGuessYet
                }
            }
            Some(Command::Singular) => self.try_singular(rules),
            None => self.give_clue(&input, rules),
        };

        debug_assert!(
            HumanRoundInvariants::check_all(self).is_ok(),
            "round invariants violated: {:?}",
            HumanRoundInvariants::check_all(self)
        );
        reply
    }

    fn give_clue(&mut self, clue: &str, rules: &Rules) -> ClueReply {
        let tokens = rules.tokenizer().tokenize(clue);
        if let Some(illegal) = rules.filter().find_violation(&self.secret_word, &tokens) {
            return ClueReply::Illegal(illegal);
        }
        if tokens.is_empty() {
            debug!("Clue had no usable tokens");
            return ClueReply::InvalidClue;
        }

        self.clues.extend(tokens);
        let guess = rules.engine().next_guess(self.clues.tokens(), &self.history);
        match &guess {
            Guess::Word(word) => {
                self.history.record(word.clone());
                self.current_guess = Some(word.clone());
                self.phase = RoundPhase::AwaitingFeedback;
            }
            Guess::Exhausted => {
                self.current_guess = None;
                self.phase = RoundPhase::AwaitingClueInput;
            }
        }
        ClueReply::Guess(guess)
    }

    fn try_singular(&mut self, rules: &Rules) -> ClueReply {
        let Some(guess) = self.current_guess.as_deref() else {
            return ClueReply::NoGuessYet;
        };
        let singular = rules.filter().singular(guess);
        self.history.record(singular.clone());
        self.current_guess = Some(singular.clone());
        self.phase = RoundPhase::AwaitingFeedback;
        ClueReply::Guess(Guess::Word(singular))
    }
}

/// The computer's answer to a guess typed while it gives clues.
#[derive(Debug, Clone, PartialEq)]
pub enum GuessReply {
    /// Nearly right; the same clue stands.
    Close,
    /// Wrong; here is the next clue.
    NextClue(String),
    /// Nothing was typed.
    EmptyGuess,
    /// The round ended.
    Finished(RoundOutcome),
}

/// Round where the computer reads definitions and the human guesses.
#[derive(Debug, Clone)]
pub struct ComputerCluesRound {
    secret_word: String,
    remaining: Vec<String>,
    current_clue: String,
    served: usize,
    phase: RoundPhase,
}

impl ComputerCluesRound {
    /// Starts a round from masked definitions, dropping any that give the
    /// word away. Clues are served from the back of `definitions`.
    #[instrument(skip(secret_word, definitions, rules), fields(definitions = definitions.len()))]
    pub fn new(secret_word: impl Into<String>, definitions: Vec<String>, rules: &Rules) -> Self {
        let secret_word = secret_word.into().to_lowercase();
        let remaining: Vec<String> = definitions
            .into_iter()
            .filter(|definition| {
                let tokens = rules.tokenizer().tokenize(definition);
                rules.filter().evaluate_clue(&secret_word, &tokens).is_none()
            })
            .collect();
        debug!(usable = remaining.len(), "Filtered definition clues");

        let mut round = Self {
            secret_word,
            remaining,
            current_clue: String::new(),
            served: 0,
            phase: RoundPhase::AwaitingGuessInput,
        };
        round.current_clue = round.serve_next();
        round
    }

    /// The word being guessed.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// The clue currently on screen.
    pub fn current_clue(&self) -> &str {
        &self.current_clue
    }

    /// How many real clues have been shown.
    pub fn clues_served(&self) -> usize {
        self.served
    }

    /// How many clues are left to show.
    pub fn remaining_clues(&self) -> usize {
        self.remaining.len()
    }

    /// Current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Ends the round without reading more input.
    pub fn finish(&mut self, outcome: RoundOutcome) {
        self.phase = RoundPhase::Finished(outcome);
    }

    /// Applies one guess.
    #[instrument(skip(self, rules), fields(word = %self.secret_word))]
    pub fn respond(&mut self, input: &str, rules: &Rules) -> GuessReply {
        if let RoundPhase::Finished(outcome) = self.phase {
            return GuessReply::Finished(outcome);
        }

        let guess = input.trim().to_lowercase();
        match Command::parse(&guess) {
            Some(Command::Quit) => {
                self.finish(RoundOutcome::Quit);
                return GuessReply::Finished(RoundOutcome::Quit);
            }
            Some(Command::No) => {
                self.finish(RoundOutcome::Passed);
                return GuessReply::Finished(RoundOutcome::Passed);
            }
            _ => {}
        }
        if guess.is_empty() {
            return GuessReply::EmptyGuess;
        }

        match closeness(&self.secret_word, &guess, rules.close_threshold()) {
            Closeness::Exact => {
                self.finish(RoundOutcome::Won);
                GuessReply::Finished(RoundOutcome::Won)
            }
            Closeness::Close(score) => {
                debug!(score, "Close guess");
                GuessReply::Close
            }
            Closeness::Miss(_) => {
                self.current_clue = self.serve_next();
                GuessReply::NextClue(self.current_clue.clone())
            }
        }
    }

    fn serve_next(&mut self) -> String {
        match self.remaining.pop() {
            Some(clue) => {
                self.served += 1;
                clue
            }
            None => OUT_OF_CLUES.to_string(),
        }
    }
}
