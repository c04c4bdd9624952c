//! Player that replays a fixed script of lines.

use super::Player;
use crate::events::Prompt;
use anyhow::Result;
use std::collections::VecDeque;
use tracing::debug;

/// Replays `lines` in order, then reports closed input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    lines: VecDeque<String>,
}

impl ScriptedPlayer {
    /// Creates a player that will type `lines`.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet typed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn next_line(&mut self, prompt: Prompt) -> Result<Option<String>> {
        let line = self.lines.pop_front();
        debug!(%prompt, ?line, "Scripted input");
        Ok(line)
    }

    fn name(&self) -> &str {
        "Script"
    }
}
