//! Human player fed by a channel, used by the terminal UI.

use super::Player;
use crate::events::Prompt;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Human player whose lines arrive over a channel.
pub struct ChannelPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl ChannelPlayer {
    /// Creates a new channel-fed player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for ChannelPlayer {
    #[instrument(skip(self), fields(player = %self.name))]
    async fn next_line(&mut self, prompt: Prompt) -> Result<Option<String>> {
        debug!(%prompt, "Waiting for a line from the UI");
        Ok(self.input_rx.recv().await)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
