//! Wraps teloxide::Bot and implements [`crate::core::Bot`].

use crate::core::{Bot as CoreBot, Chat, DbotError, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, KeyboardButton, KeyboardMarkup},
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, buttons: &[&str]) -> Result<()> {
        let rows: Vec<Vec<KeyboardButton>> = buttons
            .iter()
            .map(|b| vec![KeyboardButton::new(b.to_string())])
            .collect();
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(KeyboardMarkup::new(rows))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
