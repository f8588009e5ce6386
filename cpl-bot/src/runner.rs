use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::telegram::run_repl;

/// Main entry: validate config, init logging, build components and chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let components = build_bot_components(&config)?;
    let chain = build_handler_chain(
        components.handler_bot.clone(),
        components.session_store.clone(),
    );

    info!(log_file = %config.log_file, handlers = chain.len(), "Bot started");

    run_repl(components.teloxide_bot, chain).await
}
