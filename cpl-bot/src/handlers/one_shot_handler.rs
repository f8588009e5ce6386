//! `/cpl <payout> <approve> [trash] [roi]`: answers immediately, touches no session.

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::handlers::command::{parse_command, CMD_CPL};
use crate::handlers::render::{format_error, format_result};
use async_trait::async_trait;
use cpl_calc::compute_one_shot;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct OneShotHandler {
    bot: Arc<dyn Bot>,
}

impl OneShotHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for OneShotHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(cmd) = parse_command(&message.content).filter(|c| c.is(CMD_CPL)) else {
            return Ok(HandlerResponse::Continue);
        };

        let text = match compute_one_shot(cmd.args) {
            Ok(result) => {
                info!(
                    chat_id = message.chat.id,
                    breakeven = result.breakeven,
                    lead_price = result.lead_price,
                    "One-shot calculation"
                );
                format_result(&result)
            }
            Err(e) => {
                info!(chat_id = message.chat.id, error = %e, "One-shot calculation rejected");
                format_error(&e)
            }
        };

        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
