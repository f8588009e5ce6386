//! Logs each message in before() and the outcome in after(); never claims a message.

use crate::core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            chat_type = %message.chat.chat_type,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => debug!(
                chat_id = message.chat.id,
                message_id = %message.id,
                reply_len = text.len(),
                "Replied"
            ),
            other => debug!(
                chat_id = message.chat.id,
                message_id = %message.id,
                response = ?other,
                "No reply"
            ),
        }
        Ok(())
    }
}
