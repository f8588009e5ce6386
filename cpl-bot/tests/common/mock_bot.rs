//! Mock implementation of [`cpl_bot::Bot`] for integration tests.
//!
//! Records every outbound message so tests can assert on reply text and keyboards without
//! hitting Telegram.

use async_trait::async_trait;
use cpl_bot::{Bot, Chat, Result};
use std::sync::Mutex;

/// One recorded outbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
    /// Keyboard buttons; empty for plain messages.
    pub buttons: Vec<String>,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    /// Most recent message, panicking if nothing was sent.
    pub fn last(&self) -> SentRecord {
        self.sent().last().cloned().expect("no message sent")
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
            buttons: Vec::new(),
        });
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, buttons: &[&str]) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
            buttons: buttons.iter().map(|b| b.to_string()).collect(),
        });
        Ok(())
    }
}
