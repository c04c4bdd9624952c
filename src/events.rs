//! Presentation events emitted by the orchestrator and the round clock.

use crate::game::{FALLBACK_GUESS, Guess, IllegalClue, Role, RoundOutcome};
use crate::session::{SessionEnd, SessionSummary};
use strum::Display;

/// What the player is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Prompt {
    /// A clue for the secret word.
    #[strum(to_string = "Please enter your clue now")]
    Clue,
    /// Feedback on the computer's guess, or another clue.
    #[strum(to_string = "y = yes, n = no, s = singular, or another clue")]
    Feedback,
    /// A guess at the computer's clue.
    #[strum(to_string = "Your guess (n = new word, q = quit)")]
    Guess,
    /// Whether to keep playing after a timeout.
    #[strum(to_string = "You ran out of time. Continue playing? (y/n)")]
    Continue,
}

/// Audio feedback requested from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Cue {
    /// A point was scored.
    Point,
    /// A word was skipped.
    Skip,
    /// The round clock ran out.
    GameOver,
}

/// Something the presentation layer should show.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new round-pair began with this time budget.
    PairStarted {
        /// Seconds on each round clock of the pair.
        budget_secs: u64,
    },
    /// A round began.
    RoundStarted {
        /// Who gives clues.
        role: Role,
    },
    /// The word the human must describe.
    SecretWord(String),
    /// The computer is looking something up.
    Thinking,
    /// The player is expected to type a line.
    InputRequested(Prompt),
    /// The computer's guess at the human's clues.
    Guess(Guess),
    /// The human's clue gave the word away.
    ClueRejected(IllegalClue),
    /// The human's clue had no usable words.
    InvalidClue,
    /// Feedback arrived before any guess was made.
    NoGuessYet,
    /// The human said the guess was wrong.
    GuessRejected,
    /// A clue from the computer.
    Clue(String),
    /// The human's guess was nearly right.
    CloseGuess,
    /// The human typed nothing.
    EmptyGuess,
    /// The answer, shown when the human did not guess it.
    WordRevealed(String),
    /// A round ended.
    RoundOver(RoundOutcome),
    /// Current score.
    ScoreChanged(u32),
    /// Seconds left on the running round clock.
    TimeRemaining(u64),
    /// The running round clock reached zero.
    TimeUp,
    /// Play a sound.
    Cue(Cue),
    /// No words are left to play.
    WordsExhausted,
    /// The session ended.
    SessionOver(SessionSummary),
}

impl GameEvent {
    /// One-line text for the event, or `None` for events that are not
    /// printed as a message (clock ticks, prompts, cues).
    pub fn describe(&self) -> Option<String> {
        let text = match self {
            GameEvent::PairStarted { budget_secs } => {
                format!("New round! You have {} seconds per turn.", budget_secs)
            }
            GameEvent::RoundStarted { role } => role.to_string(),
            GameEvent::SecretWord(word) => format!("Your word is: {}", word),
            GameEvent::Thinking => "Thinking...".to_string(),
            GameEvent::Guess(Guess::Word(word)) => format!("Is {} your word?", word),
            GameEvent::Guess(Guess::Exhausted) => FALLBACK_GUESS.to_string(),
            GameEvent::ClueRejected(illegal) => format!("Illegal clue: {}", illegal),
            GameEvent::InvalidClue => "Please enter a valid clue".to_string(),
            GameEvent::NoGuessYet => "I haven't guessed anything yet. Give me a clue!".to_string(),
            GameEvent::GuessRejected => "Okay, give me another clue.".to_string(),
            GameEvent::Clue(clue) => format!("Clue: {}", clue),
            GameEvent::CloseGuess => "Close! Try again.".to_string(),
            GameEvent::EmptyGuess => "Please enter a guess".to_string(),
            GameEvent::WordRevealed(word) => format!("The word was: {}", word),
            GameEvent::RoundOver(outcome) => match outcome {
                RoundOutcome::Won => "Correct!".to_string(),
                RoundOutcome::Passed => "Skipping to a new word.".to_string(),
                RoundOutcome::Quit => "Round abandoned.".to_string(),
                RoundOutcome::TimedOut => "Time's up!".to_string(),
            },
            GameEvent::ScoreChanged(score) => format!("Score: {}", score),
            GameEvent::TimeUp => "Time's up!".to_string(),
            GameEvent::WordsExhausted => "No more words to play!".to_string(),
            GameEvent::SessionOver(summary) => match summary.end() {
                SessionEnd::WordsExhausted => format!(
                    "That's every word! Final score: {}",
                    summary.score()
                ),
                _ => format!("Thanks for playing! Final score: {}", summary.score()),
            },
            GameEvent::InputRequested(_) | GameEvent::TimeRemaining(_) | GameEvent::Cue(_) => {
                return None;
            }
        };
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_read_naturally() {
        assert_eq!(Prompt::Clue.to_string(), "Please enter your clue now");
        assert_eq!(
            Prompt::Continue.to_string(),
            "You ran out of time. Continue playing? (y/n)"
        );
    }

    #[test]
    fn test_guess_descriptions() {
        assert_eq!(
            GameEvent::Guess(Guess::Word("dog".to_string())).describe(),
            Some("Is dog your word?".to_string())
        );
        assert_eq!(
            GameEvent::Guess(Guess::Exhausted).describe(),
            Some(FALLBACK_GUESS.to_string())
        );
    }

    #[test]
    fn test_ticks_are_silent() {
        assert_eq!(GameEvent::TimeRemaining(42).describe(), None);
        assert_eq!(GameEvent::Cue(Cue::Point).describe(), None);
    }
}
