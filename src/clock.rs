//! Round countdown.

use crate::events::{Cue, GameEvent};
use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Inclusive range of round budgets, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget {
    min_secs: u64,
    max_secs: u64,
}

impl TimeBudget {
    /// Creates a range; the bounds are ordered if given backwards.
    pub fn new(min_secs: u64, max_secs: u64) -> Self {
        Self {
            min_secs: min_secs.min(max_secs),
            max_secs: min_secs.max(max_secs),
        }
    }

    /// Budget that is always `secs`.
    pub fn fixed(secs: u64) -> Self {
        Self::new(secs, secs)
    }

    /// Draws a budget uniformly from the range.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_secs(rng.random_range(self.min_secs..=self.max_secs))
    }
}

/// A running countdown for one round.
///
/// A background task publishes [`GameEvent::TimeRemaining`] once a second,
/// from the full budget down to zero, then [`GameEvent::TimeUp`] and a
/// game-over cue. The task never interrupts input; callers check
/// [`RoundClock::is_expired`] after each read. Dropping the clock stops the
/// task.
#[derive(Debug)]
pub struct RoundClock {
    deadline: Instant,
    ticker: JoinHandle<()>,
}

impl RoundClock {
    /// Starts counting down `budget` from now.
    #[instrument(skip(events))]
    pub fn start(budget: Duration, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        let started = Instant::now();
        let deadline = started + budget;
        let secs = budget.as_secs();

        let ticker = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(started, Duration::from_secs(1));
            for remaining in (0..=secs).rev() {
                interval.tick().await;
                if events.send(GameEvent::TimeRemaining(remaining)).is_err() {
                    return;
                }
            }
            debug!("Round clock expired");
            let _ = events.send(GameEvent::TimeUp);
            let _ = events.send(GameEvent::Cue(Cue::GameOver));
        });

        Self { deadline, ticker }
    }

    /// Whether the deadline has passed.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Time left before the deadline.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

impl Drop for RoundClock {
    fn drop(&mut self) {
        debug!("Stopping round clock");
        self.ticker.abort();
    }
}
