//! Component factory: teloxide bot, outbound Bot adapter, session store, handler chain.

use anyhow::Result;
use cpl_calc::{InMemorySessionStore, SessionStore};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot;
use crate::handlers::{LoggingHandler, MenuHandler, OneShotHandler, WizardHandler};
use crate::telegram::TelegramBotAdapter;

/// Everything run_bot needs. The session store lives here, owned by the routing layer.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub handler_bot: Arc<dyn Bot>,
    pub session_store: Arc<dyn SessionStore>,
}

/// Builds components from config. Fails on an invalid TELEGRAM_API_URL.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let mut teloxide_bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(url) = config.api_url()? {
        info!(url = %url, "Using custom Telegram API URL");
        teloxide_bot = teloxide_bot.set_api_url(url);
    }

    let handler_bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let session_store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    Ok(BotComponents {
        teloxide_bot,
        handler_bot,
        session_store,
    })
}

/// Chain order: logging, menu, one-shot command, wizard. Commands are matched before the
/// wizard, so `/cpl` mid-dialog answers without touching the session.
pub fn build_handler_chain(bot: Arc<dyn Bot>, store: Arc<dyn SessionStore>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(MenuHandler::new(bot.clone())))
        .add_handler(Arc::new(OneShotHandler::new(bot.clone())))
        .add_handler(Arc::new(WizardHandler::new(bot, store)))
}
