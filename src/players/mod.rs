//! Player trait and implementations.

mod channel;
mod scripted;
mod stdin;

pub use channel::ChannelPlayer;
pub use scripted::ScriptedPlayer;
pub use stdin::StdinPlayer;

use crate::events::Prompt;
use anyhow::Result;

/// A source of typed lines.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Waits for the next line of input for `prompt`.
    ///
    /// Returns `None` once input is closed.
    async fn next_line(&mut self, prompt: Prompt) -> Result<Option<String>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
