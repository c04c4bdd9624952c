//! Catch Phrase game core: clue legality, guessing and round state machines.

mod guess;
mod invariants;
mod legality;
mod round;
mod rules;
mod similarity;
mod tokenizer;
mod types;

pub use guess::{DEFAULT_CANDIDATES, FALLBACK_GUESS, Guess, GuessEngine};
pub use invariants::{
    CurrentGuessRecorded, HumanRoundInvariants, Invariant, InvariantSet, SecretNotInBag,
    WinHasGuess,
};
pub use legality::{IllegalClue, LexicalFilter, Violation};
pub use round::{
    ClueReply, Command, ComputerCluesRound, GuessReply, HumanCluesRound, OUT_OF_CLUES, RoundPhase,
};
pub use rules::{Collaborators, Rules};
pub use similarity::{Closeness, DEFAULT_CLOSE_THRESHOLD, closeness, similarity};
pub use tokenizer::Tokenizer;
pub use types::{ClueBag, GuessHistory, Role, RoundOutcome};
