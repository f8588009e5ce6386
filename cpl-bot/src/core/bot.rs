//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; `telegram::TelegramBotAdapter` implements it via teloxide and
//! tests substitute a recording mock.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::{Chat, Message};

/// Outbound side of the chat transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
    /// Sends a message with a one-button-per-row reply keyboard.
    async fn send_menu(&self, chat: &Chat, text: &str, buttons: &[&str]) -> Result<()>;
}
