//! Inbound message model.

use super::{chat::Chat, user::User};

/// A single inbound text message with sender and chat.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
}

impl Message {
    /// Conversation key for session lookups.
    pub fn conversation_id(&self) -> i64 {
        self.chat.id
    }
}
