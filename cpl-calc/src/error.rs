//! Error types for the calculator and wizard.
//!
//! Every variant is recoverable: the caller renders it to the user and the conversation goes on.

use thiserror::Error;

/// Validation and state errors from the one-shot command and the wizard.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Fewer numeric tokens than the command needs.
    #[error("Insufficient arguments: need at least {required}, got {got}")]
    InsufficientArguments { required: usize, got: usize },

    /// A token or reply that is not a finite number.
    #[error("Not a number: {0:?}")]
    NonNumericArgument(String),

    /// Stored session does not match any reachable wizard state; the session was dropped.
    #[error("Invalid session state")]
    InvalidSessionState,

    /// Inputs produce a non-finite result (trash or ROI of -100%).
    #[error("Degenerate input: result is not a finite number")]
    DegenerateInput,
}

/// Result type for calculator and wizard operations.
pub type Result<T> = std::result::Result<T, CalcError>;
