//! Step-by-step dialog: `/wizard` (or the menu button) starts it, plain text replies feed it.

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::handlers::command::{is_wizard_trigger, parse_command};
use crate::handlers::render::{format_error, format_result, prompt, NOT_A_NUMBER};
use async_trait::async_trait;
use cpl_calc::{CalcError, SessionStore, Wizard, WizardOutcome};
use std::sync::Arc;
use tracing::{info, instrument};

/// Owns a handle to the session store shared by the whole bot.
pub struct WizardHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn SessionStore>,
}

impl WizardHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn SessionStore>) -> Self {
        Self { bot, store }
    }

    /// Text to send for a wizard reply, or None if the conversation is not in a dialog.
    fn reply_for(&self, conversation_id: i64, text: &str) -> Option<String> {
        let wizard = Wizard::new(self.store.as_ref());
        match wizard.submit_value(conversation_id, text) {
            Ok(WizardOutcome::NotInDialog) => None,
            Ok(WizardOutcome::Next(step)) => Some(prompt(step).to_string()),
            Ok(WizardOutcome::Completed(result)) => Some(format_result(&result)),
            Err(CalcError::NonNumericArgument(_)) => {
                let reprompt = wizard
                    .session(conversation_id)
                    .map(|s| format!("{}\n{}", NOT_A_NUMBER, prompt(s.step)))
                    .unwrap_or_else(|| NOT_A_NUMBER.to_string());
                Some(reprompt)
            }
            Err(e) => Some(format_error(&e)),
        }
    }
}

#[async_trait]
impl Handler for WizardHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let conversation_id = message.conversation_id();

        let text = if is_wizard_trigger(&message.content) {
            let step = Wizard::new(self.store.as_ref()).start_session(conversation_id);
            prompt(step).to_string()
        } else if parse_command(&message.content).is_some() {
            return Ok(HandlerResponse::Continue);
        } else {
            match self.reply_for(conversation_id, &message.content) {
                Some(text) => text,
                None => return Ok(HandlerResponse::Continue),
            }
        };

        info!(chat_id = conversation_id, "Wizard reply");
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
