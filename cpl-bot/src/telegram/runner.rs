//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use crate::handlers::command::{CMD_CPL, CMD_HELP, CMD_START, CMD_WIZARD};
use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Command list shown in the Telegram client menu.
pub fn bot_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new(CMD_START, "Show the menu"),
        BotCommand::new(CMD_HELP, "How to use the calculator"),
        BotCommand::new(CMD_CPL, "payout approve [trash] [roi] - calculate CPL"),
        BotCommand::new(CMD_WIZARD, "Step-by-step calculation"),
    ]
}

/// Registers [`bot_commands`] and starts the REPL.
///
/// Each text message is converted to core::Message and run through the chain inline; teloxide
/// delivers updates of one chat sequentially, so a conversation's wizard replies are handled in order.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Connected to Telegram"),
        Err(e) => warn!(error = %e, "get_me failed"),
    }
    if let Err(e) = bot.set_my_commands(bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            if msg.text().is_none() {
                info!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                return respond(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if let Err(e) = chain.handle(&core_msg).await {
                error!(
                    error = %e,
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Handler chain failed"
                );
            }
            respond(())
        }
    })
    .await;

    Ok(())
}
