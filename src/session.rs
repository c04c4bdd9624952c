//! Word queue, score and session lifecycle.

use crate::game::RoundOutcome;
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use strum::Display;
use tracing::{debug, info, instrument};

/// A finite queue of secret words; each is handed out at most once.
#[derive(Debug, Clone, Default)]
pub struct WordQueue {
    // Stored reversed so the next word is at the end.
    words: Vec<String>,
}

impl WordQueue {
    /// Queue that hands out `words` in order.
    pub fn new(words: Vec<String>) -> Self {
        let mut words = words;
        words.reverse();
        Self { words }
    }

    /// Queue that hands out `words` in a random order.
    pub fn shuffled<R: Rng + ?Sized>(words: Vec<String>, rng: &mut R) -> Self {
        let mut words = words;
        words.shuffle(rng);
        Self { words }
    }

    /// Removes the next word, or `None` when exhausted.
    pub fn pop(&mut self) -> Option<String> {
        self.words.pop()
    }

    /// Words left.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether every word has been played.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SessionEnd {
    /// The player quit, or input was closed.
    Quit,
    /// The player declined to continue after a timeout.
    Declined,
    /// Every word was played.
    WordsExhausted,
}

/// Final state of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Points scored.
    score: u32,
    /// Rounds that reached an outcome.
    rounds_played: usize,
    /// Why the session ended.
    end: SessionEnd,
}

/// Score, word queue and running flag for one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    words: WordQueue,
    score: u32,
    rounds_played: usize,
    running: bool,
}

impl GameSession {
    /// Starts a session over `words` with a score of zero.
    #[instrument(skip(words), fields(words = words.len()))]
    pub fn new(words: WordQueue) -> Self {
        info!("Starting game session");
        Self {
            words,
            score: 0,
            rounds_played: 0,
            running: true,
        }
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rounds that reached an outcome.
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Words not yet played.
    pub fn words_left(&self) -> usize {
        self.words.len()
    }

    /// Takes the next secret word, or `None` when the queue is exhausted.
    pub fn next_word(&mut self) -> Option<String> {
        if !self.running || self.words.is_empty() {
            debug!(running = self.running, "No word available");
            return None;
        }
        self.words.pop()
    }

    /// Records a round outcome and returns the points it earned.
    #[instrument(skip(self), fields(score = self.score))]
    pub fn record(&mut self, outcome: RoundOutcome) -> u32 {
        let points = outcome.points();
        self.score += points;
        self.rounds_played += 1;
        debug!(points, new_score = self.score, "Recorded round");
        points
    }

    /// Stops the session and summarizes it.
    #[instrument(skip(self))]
    pub fn finish(&mut self, end: SessionEnd) -> SessionSummary {
        self.running = false;
        info!(score = self.score, rounds = self.rounds_played, %end, "Session finished");
        SessionSummary {
            score: self.score,
            rounds_played: self.rounds_played,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_queue_keeps_order() {
        let mut queue = WordQueue::new(words(&["dog", "cat"]));
        assert_eq!(queue.pop().as_deref(), Some("dog"));
        assert_eq!(queue.pop().as_deref(), Some("cat"));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_shuffle_hands_out_each_word_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut queue = WordQueue::shuffled(words(&["a", "b", "c", "d"]), &mut rng);
        let mut seen = Vec::new();
        while let Some(word) = queue.pop() {
            seen.push(word);
        }
        seen.sort();
        assert_eq!(seen, words(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_score_counts_only_wins() {
        let mut session = GameSession::new(WordQueue::new(words(&["dog"])));
        assert_eq!(session.score(), 0);
        assert_eq!(session.record(RoundOutcome::Won), 1);
        assert_eq!(session.record(RoundOutcome::Passed), 0);
        assert_eq!(session.record(RoundOutcome::TimedOut), 0);
        assert_eq!(session.score(), 1);
        assert_eq!(session.rounds_played(), 3);
    }

    #[test]
    fn test_finish_stops_handing_out_words() {
        let mut session = GameSession::new(WordQueue::new(words(&["dog", "cat"])));
        assert_eq!(session.next_word().as_deref(), Some("dog"));
        let summary = session.finish(SessionEnd::Quit);
        assert_eq!(*summary.end(), SessionEnd::Quit);
        assert_eq!(session.next_word(), None);
        assert_eq!(session.words_left(), 1);
    }
}
