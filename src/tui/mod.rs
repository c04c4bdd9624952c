//! Terminal UI for Catch Phrase

mod app;
mod ui;

use anyhow::Result;
use catch_phrase::{ChannelPlayer, GameEvent, GameSetup};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{error, info, instrument};

use app::App;

/// Runs a session in the terminal UI.
pub async fn run(setup: GameSetup) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    let player = ChannelPlayer::new("You", input_rx);
    let orchestrator = setup.into_orchestrator(Box::new(player), event_tx);
    let game = tokio::spawn(orchestrator.run());

    let res = run_app(&mut terminal, event_rx, input_tx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if game.is_finished() {
        match game.await? {
            Ok(summary) => info!(score = summary.score(), end = %summary.end(), "Game finished"),
            Err(e) => error!(error = ?e, "Game loop error"),
        }
    } else {
        game.abort();
    }

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    res
}

/// Draws, drains game events and forwards typed lines until the user leaves.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
    input_tx: mpsc::UnboundedSender<String>,
) -> Result<()> {
    let mut app = App::new();

    loop {
        loop {
            match event_rx.try_recv() {
                Ok(event) => app.handle_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    app.disconnect();
                    break;
                }
            }
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(line) = app.handle_key(key.code) {
                        if input_tx.send(line).is_err() {
                            app.disconnect();
                        }
                    }
                }
            }
        }

        if app.should_quit() {
            info!("User left the game");
            return Ok(());
        }
        tokio::task::yield_now().await;
    }
}
