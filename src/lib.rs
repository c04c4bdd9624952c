//! Catch Phrase library - a timed word-guessing game against the computer
//!
//! One side describes a secret word, the other guesses, and a clock bounds
//! every round. When the human gives clues, the computer guesses by nearest
//! neighbour search over word embeddings; when the computer gives clues, it
//! reads dictionary definitions with the word blanked out.
//!
//! # Architecture
//!
//! - **Game**: clue legality, guess generation and round state machines
//! - **Clock**: per-round countdown publishing ticks as events
//! - **Session**: word queue, score and end-of-game summary
//! - **Orchestrator**: drives round-pairs against a [`Player`], emitting [`GameEvent`]s
//!
//! # Example
//!
//! ```no_run
//! use catch_phrase::{GameConfig, ScriptedPlayer, build_setup};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load_or_default("catch_phrase.toml")?;
//! let setup = build_setup(&config, Some(7))?;
//!
//! let (event_tx, _event_rx) = mpsc::unbounded_channel();
//! let player = ScriptedPlayer::new(["furry pet", "y", "q"]);
//! let summary = setup
//!     .into_orchestrator(Box::new(player), event_tx)
//!     .run()
//!     .await?;
//! println!("Scored {}", summary.score());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod clock;
mod config;
mod events;
mod orchestrator;
mod players;
mod session;
mod setup;

/// Game core: legality, guessing and rounds.
pub mod game;

// Crate-level exports - Configuration
pub use config::{ConfigError, DefinitionsConfig, GameConfig};

// Crate-level exports - Game core
pub use game::{
    ClueReply, Collaborators, ComputerCluesRound, Guess, GuessEngine, GuessReply,
    HumanCluesRound, IllegalClue, LexicalFilter, Role, RoundOutcome, Rules, Tokenizer, Violation,
};

// Crate-level exports - Timing
pub use clock::{RoundClock, TimeBudget};

// Crate-level exports - Presentation events
pub use events::{Cue, GameEvent, Prompt};

// Crate-level exports - Session
pub use orchestrator::{GameSetup, Orchestrator};
pub use session::{GameSession, SessionEnd, SessionSummary, WordQueue};
pub use setup::{build_setup, definition_source};

// Crate-level exports - Players
pub use players::{ChannelPlayer, Player, ScriptedPlayer, StdinPlayer};
