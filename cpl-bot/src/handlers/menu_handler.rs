//! `/start` and `/help`: menu text plus the wizard button.

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::handlers::command::{parse_command, CMD_HELP, CMD_START, WIZARD_BUTTON};
use crate::handlers::render::MENU_TEXT;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct MenuHandler {
    bot: Arc<dyn Bot>,
}

impl MenuHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for MenuHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(cmd) = parse_command(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        if !cmd.is(CMD_START) && !cmd.is(CMD_HELP) {
            return Ok(HandlerResponse::Continue);
        }

        info!(chat_id = message.chat.id, command = %cmd.name, "Sending menu");
        self.bot
            .send_menu(&message.chat, MENU_TEXT, &[WIZARD_BUTTON])
            .await?;
        Ok(HandlerResponse::Reply(MENU_TEXT.to_string()))
    }
}
