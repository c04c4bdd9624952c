//! Line-oriented console front end.

use anyhow::Result;
use catch_phrase::{GameEvent, GameSetup, SessionSummary, StdinPlayer};
use std::io::Write;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

const BANNER: &str = r"
  ____      _       _       ____  _
 / ___|__ _| |_ ___| |__   |  _ \| |__  _ __ __ _ ___  ___
| |   / _` | __/ __| '_ \  | |_) | '_ \| '__/ _` / __|/ _ \
| |__| (_| | || (__| | | | |  __/| | | | | | (_| \__ \  __/
 \____\__,_|\__\___|_| |_| |_|   |_| |_|_|  \__,_|___/\___|
";

const INSTRUCTIONS: &str = "\
We take turns. On your turn I show you a word: describe it without saying it,
anything that rhymes with it, or any part of it. After each guess type
y if I got it, n if I didn't, s to try the singular, or just give another clue.
On my turn I give you clues: type your guess, n to skip the word, q to quit.
";

/// Prints the title and how to play.
pub fn print_banner() {
    println!("{}", BANNER);
    println!("{}", INSTRUCTIONS);
}

/// Plays a session at the console, reading stdin and printing events.
#[instrument(skip(setup))]
pub async fn run(setup: GameSetup) -> Result<SessionSummary> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render(event_rx));

    let orchestrator = setup.into_orchestrator(Box::new(StdinPlayer::new("You")), event_tx);
    let summary = orchestrator.run().await?;

    renderer.await?;
    Ok(summary)
}

async fn render(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    let mut console = ConsoleText::default();
    while let Some(event) = event_rx.recv().await {
        debug!(?event, "Rendering event");
        if let Some(text) = console.format_event(&event) {
            print!("{}", text);
            let _ = std::io::stdout().flush();
        }
    }
}

/// Turns events into console text, remembering the round clock so prompts
/// can show it.
#[derive(Debug, Default)]
struct ConsoleText {
    seconds_left: Option<u64>,
}

impl ConsoleText {
    /// Text printed for an event, including any trailing newline.
    fn format_event(&mut self, event: &GameEvent) -> Option<String> {
        match event {
            GameEvent::InputRequested(prompt) => Some(match self.seconds_left {
                Some(secs) => format!("{} [{}s left]: ", prompt, secs),
                None => format!("{}: ", prompt),
            }),
            GameEvent::TimeRemaining(secs) => {
                self.seconds_left = Some(*secs);
                announce_time(*secs).then(|| format!("[{} seconds left]\n", secs))
            }
            GameEvent::Cue(_) => Some("\x07".to_string()),
            GameEvent::PairStarted { .. } | GameEvent::SessionOver(_) => {
                event.describe().map(|text| format!("\n{}\n", text))
            }
            GameEvent::RoundStarted { .. } | GameEvent::TimeUp | GameEvent::RoundOver(_) => {
                self.seconds_left = None;
                event.describe().map(|text| format!("{}\n", text))
            }
            _ => event.describe().map(|text| format!("{}\n", text)),
        }
    }
}

/// Every half minute, then each of the last five seconds.
fn announce_time(secs: u64) -> bool {
    secs > 0 && (secs % 30 == 0 || secs <= 5)
}
