//! Human player reading lines from standard input.

use super::Player;
use crate::events::Prompt;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, instrument};

/// Human player at the console.
pub struct StdinPlayer {
    name: String,
    lines: Lines<BufReader<Stdin>>,
}

impl StdinPlayer {
    /// Creates a player reading from this process's stdin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait::async_trait]
impl Player for StdinPlayer {
    #[instrument(skip(self), fields(player = %self.name))]
    async fn next_line(&mut self, prompt: Prompt) -> Result<Option<String>> {
        debug!(%prompt, "Reading a line from stdin");
        let line = self.lines.next_line().await?;
        if line.is_none() {
            debug!("Standard input closed");
        }
        Ok(line)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
