//! Application state and logic.

use catch_phrase::{GameEvent, Prompt, Role, SessionSummary};
use crossterm::event::KeyCode;
use tracing::debug;

/// How many messages the log keeps.
const MESSAGE_LIMIT: usize = 200;

/// Main application state.
#[derive(Debug, Default)]
pub struct App {
    messages: Vec<String>,
    input: String,
    prompt: Option<Prompt>,
    score: u32,
    time_left: Option<u64>,
    role: Option<Role>,
    secret_word: Option<String>,
    summary: Option<SessionSummary>,
    disconnected: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self::default()
    }

    /// Message log, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// What the game is waiting for, if anything.
    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the round clock.
    pub fn time_left(&self) -> Option<u64> {
        self.time_left
    }

    /// Who gives clues this round.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The word the human is describing.
    pub fn secret_word(&self) -> Option<&str> {
        self.secret_word.as_deref()
    }

    /// Whether the game is over, by summary or because it stopped talking.
    pub fn is_finished(&self) -> bool {
        self.summary.is_some() || self.disconnected
    }

    /// Whether the UI should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match &event {
            GameEvent::InputRequested(prompt) => self.prompt = Some(*prompt),
            GameEvent::ScoreChanged(score) => self.score = *score,
            GameEvent::TimeRemaining(secs) => self.time_left = Some(*secs),
            GameEvent::RoundStarted { role } => {
                self.role = Some(*role);
                self.secret_word = None;
            }
            GameEvent::SecretWord(word) => self.secret_word = Some(word.clone()),
            GameEvent::RoundOver(_) => {
                self.time_left = None;
                self.secret_word = None;
            }
            GameEvent::SessionOver(summary) => {
                self.prompt = None;
                self.summary = Some(summary.clone());
            }
            _ => {}
        }

        if let Some(text) = event.describe() {
            self.push_message(text);
        }
    }

    /// Marks the game as gone; the next key exits.
    pub fn disconnect(&mut self) {
        if !self.is_finished() {
            self.disconnected = true;
            self.prompt = None;
            self.push_message("The game has stopped. Press any key to exit.".to_string());
        }
    }

    /// Handles a key press, returning a submitted line.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<String> {
        if self.is_finished() {
            self.should_quit = true;
            return None;
        }

        match key {
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Enter if self.prompt.is_some() => {
                let line = std::mem::take(&mut self.input);
                self.push_message(format!("> {}", line));
                self.prompt = None;
                Some(line)
            }
            KeyCode::Esc => {
                self.input.clear();
                Some("q".to_string())
            }
            _ => None,
        }
    }

    fn push_message(&mut self, text: String) {
        self.messages.push(text);
        if self.messages.len() > MESSAGE_LIMIT {
            let excess = self.messages.len() - MESSAGE_LIMIT;
            self.messages.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catch_phrase::Guess;

    #[test]
    fn test_enter_submits_only_when_prompted() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('h'));
        app.handle_key(KeyCode::Char('i'));
        assert_eq!(app.handle_key(KeyCode::Enter), None);

        app.handle_event(GameEvent::InputRequested(Prompt::Clue));
        assert_eq!(app.handle_key(KeyCode::Enter), Some("hi".to_string()));
        assert_eq!(app.input(), "");
        assert_eq!(app.prompt(), None);
    }

    #[test]
    fn test_escape_quits_round() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.handle_key(KeyCode::Esc), Some("q".to_string()));
        assert_eq!(app.input(), "");
    }

    #[test]
    fn test_events_update_header_state() {
        let mut app = App::new();
        app.handle_event(GameEvent::RoundStarted {
            role: Role::HumanGivesClues,
        });
        app.handle_event(GameEvent::SecretWord("dog".to_string()));
        app.handle_event(GameEvent::TimeRemaining(42));
        app.handle_event(GameEvent::ScoreChanged(3));
        app.handle_event(GameEvent::Guess(Guess::Word("cat".to_string())));

        assert_eq!(app.secret_word(), Some("dog"));
        assert_eq!(app.time_left(), Some(42));
        assert_eq!(app.score(), 3);
        assert_eq!(app.messages().last().map(String::as_str), Some("Is cat your word?"));
    }

    #[test]
    fn test_any_key_exits_after_disconnect() {
        let mut app = App::new();
        app.disconnect();
        assert!(app.is_finished());
        assert_eq!(app.handle_key(KeyCode::Char('a')), None);
        assert!(app.should_quit());
    }
}
