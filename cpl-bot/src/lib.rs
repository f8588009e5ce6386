//! # CPL calculator bot
//!
//! Telegram front end for [`cpl_calc`]: `/cpl` one-shot command and a step-by-step wizard.
//! Core (Handler, Bot, Message), chain (HandlerChain), telegram (run_repl, adapters), config and
//! CLI live here; the formula and the dialog state machine live in `cpl-calc`.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use self::core::{
    init_tracing, Bot, Chat, DbotError, Handler, HandlerResponse, Message, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    bot_commands, run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper,
};

pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use handlers::{LoggingHandler, MenuHandler, OneShotHandler, WizardHandler, WIZARD_BUTTON};
pub use runner::run_bot;
