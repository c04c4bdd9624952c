//! Session driver: sequences round-pairs between the player and the computer.

use crate::clock::{RoundClock, TimeBudget};
use crate::events::{Cue, GameEvent, Prompt};
use crate::game::{
    ClueReply, ComputerCluesRound, GuessReply, HumanCluesRound, Role, RoundOutcome, RoundPhase,
    Rules,
};
use crate::players::Player;
use crate::session::{GameSession, SessionEnd, SessionSummary};
use anyhow::Result;
use rand::rngs::StdRng;
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Everything a game needs before a player joins.
#[derive(Debug)]
pub struct GameSetup {
    /// Word queue and score.
    pub session: GameSession,
    /// Collaborators and thresholds.
    pub rules: Rules,
    /// Range each round-pair's budget is drawn from.
    pub budget: TimeBudget,
    /// Source of budget draws.
    pub rng: StdRng,
}

impl GameSetup {
    /// Binds the setup to a player and an event channel.
    pub fn into_orchestrator(
        self,
        player: Box<dyn Player>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Orchestrator {
        Orchestrator::new(self, player, events)
    }
}

/// Runs a game session against one player.
pub struct Orchestrator {
    session: GameSession,
    rules: Rules,
    budget: TimeBudget,
    rng: StdRng,
    player: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        setup: GameSetup,
        player: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let GameSetup {
            session,
            rules,
            budget,
            rng,
        } = setup;
        Self {
            session,
            rules,
            budget,
            rng,
            player,
            event_tx,
        }
    }

    /// Plays round-pairs until the player quits, declines to continue after
    /// a timeout, or the words run out.
    #[instrument(skip(self), fields(player = %self.player.name()))]
    pub async fn run(mut self) -> Result<SessionSummary> {
        info!("Starting game orchestration");
        self.emit(GameEvent::ScoreChanged(self.session.score()))?;

        loop {
            let budget = self.budget.draw(&mut self.rng);
            debug!(
                budget_secs = budget.as_secs(),
                words_left = self.session.words_left(),
                "Starting round-pair"
            );
            self.emit(GameEvent::PairStarted {
                budget_secs: budget.as_secs(),
            })?;

            for role in Role::iter() {
                let Some(word) = self.session.next_word() else {
                    info!("Word queue exhausted");
                    self.emit(GameEvent::WordsExhausted)?;
                    return self.finish(SessionEnd::WordsExhausted);
                };

                let outcome = match role {
                    Role::HumanGivesClues => self.play_human_round(word, budget).await?,
                    Role::ComputerGivesClues => self.play_computer_round(word, budget).await?,
                };

                let points = self.session.record(outcome);
                self.emit(GameEvent::RoundOver(outcome))?;
                if points > 0 {
                    self.emit(GameEvent::Cue(Cue::Point))?;
                    self.emit(GameEvent::ScoreChanged(self.session.score()))?;
                }

                match outcome {
                    RoundOutcome::Quit => return self.finish(SessionEnd::Quit),
                    RoundOutcome::TimedOut => {
                        if self.ask_to_continue().await? {
                            break;
                        }
                        return self.finish(SessionEnd::Declined);
                    }
                    RoundOutcome::Won | RoundOutcome::Passed => {}
                }
            }
        }
    }

    /// The human describes `word`; the computer guesses.
    #[instrument(skip(self, word))]
    async fn play_human_round(&mut self, word: String, budget: Duration) -> Result<RoundOutcome> {
        self.emit(GameEvent::RoundStarted {
            role: Role::HumanGivesClues,
        })?;
        self.emit(GameEvent::SecretWord(word.clone()))?;

        let mut round = HumanCluesRound::new(word);
        let clock = RoundClock::start(budget, self.event_tx.clone());

        loop {
            let prompt = match round.phase() {
                RoundPhase::AwaitingFeedback => Prompt::Feedback,
                _ => Prompt::Clue,
            };
            self.emit(GameEvent::InputRequested(prompt))?;
            let line = self.player.next_line(prompt).await?;
            debug!(remaining_secs = clock.remaining().as_secs(), "Clue input received");

            if clock.is_expired() {
                debug!("Input arrived after the deadline");
                round.finish(RoundOutcome::TimedOut);
                return Ok(RoundOutcome::TimedOut);
            }
            let Some(line) = line else {
                info!("Input closed during round");
                round.finish(RoundOutcome::Quit);
                return Ok(RoundOutcome::Quit);
            };

            match round.respond(&line, &self.rules) {
                ClueReply::Guess(guess) => self.emit(GameEvent::Guess(guess))?,
                ClueReply::Illegal(illegal) => self.emit(GameEvent::ClueRejected(illegal))?,
                ClueReply::InvalidClue => self.emit(GameEvent::InvalidClue)?,
                ClueReply::NoGuessYet => self.emit(GameEvent::NoGuessYet)?,
                ClueReply::GuessRejected => self.emit(GameEvent::GuessRejected)?,
                ClueReply::Finished(outcome) => return Ok(outcome),
            }
        }
    }

    /// The computer reads definitions of `word`; the human guesses.
    #[instrument(skip(self, word))]
    async fn play_computer_round(
        &mut self,
        word: String,
        budget: Duration,
    ) -> Result<RoundOutcome> {
        self.emit(GameEvent::RoundStarted {
            role: Role::ComputerGivesClues,
        })?;
        self.emit(GameEvent::Thinking)?;

        let definitions = match self.rules.definitions().definitions_for(&word).await {
            Ok(definitions) => definitions,
            Err(e) => {
                warn!(error = %e, "Definition lookup failed");
                Vec::new()
            }
        };
        let mut round = ComputerCluesRound::new(word, definitions, &self.rules);
        let clock = RoundClock::start(budget, self.event_tx.clone());
        self.emit(GameEvent::Clue(round.current_clue().to_string()))?;

        loop {
            self.emit(GameEvent::InputRequested(Prompt::Guess))?;
            let line = self.player.next_line(Prompt::Guess).await?;
            debug!(remaining_secs = clock.remaining().as_secs(), "Guess received");

            let outcome = if clock.is_expired() {
                debug!("Input arrived after the deadline");
                round.finish(RoundOutcome::TimedOut);
                RoundOutcome::TimedOut
            } else if let Some(line) = line {
                match round.respond(&line, &self.rules) {
                    GuessReply::Close => {
                        self.emit(GameEvent::CloseGuess)?;
                        continue;
                    }
                    GuessReply::NextClue(clue) => {
                        debug!(clues_left = round.remaining_clues(), "Serving next clue");
                        self.emit(GameEvent::Clue(clue))?;
                        continue;
                    }
                    GuessReply::EmptyGuess => {
                        self.emit(GameEvent::EmptyGuess)?;
                        continue;
                    }
                    GuessReply::Finished(outcome) => outcome,
                }
            } else {
                info!("Input closed during round");
                round.finish(RoundOutcome::Quit);
                RoundOutcome::Quit
            };

            if outcome != RoundOutcome::Won {
                self.emit(GameEvent::WordRevealed(round.secret_word().to_string()))?;
            }
            if outcome == RoundOutcome::Passed {
                self.emit(GameEvent::Cue(Cue::Skip))?;
            }
            return Ok(outcome);
        }
    }

    /// Asks whether to keep playing after a timeout.
    async fn ask_to_continue(&mut self) -> Result<bool> {
        self.emit(GameEvent::InputRequested(Prompt::Continue))?;
        let answer = self
            .player
            .next_line(Prompt::Continue)
            .await?
            .map(|answer| answer.trim().to_lowercase());
        let keep_going = matches!(answer.as_deref(), Some("y" | "yes"));
        info!(keep_going, "Continue prompt answered");
        Ok(keep_going)
    }

    fn finish(&mut self, end: SessionEnd) -> Result<SessionSummary> {
        let summary = self.session.finish(end);
        self.emit(GameEvent::SessionOver(summary.clone()))?;
        Ok(summary)
    }

    fn emit(&self, event: GameEvent) -> Result<()> {
        self.event_tx.send(event)?;
        Ok(())
    }
}
