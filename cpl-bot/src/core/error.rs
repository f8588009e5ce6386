//! Error type for the bot runtime.
//!
//! Calculator and wizard errors are rendered to the user by the handlers and never reach here;
//! [`DbotError`] covers transport failures.

use thiserror::Error;

/// Runtime error raised while talking to the chat transport.
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
