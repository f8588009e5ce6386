//! Routing handlers: logging, menu, one-shot `/cpl`, and the step-by-step wizard.

pub mod command;
pub mod render;

mod logging_handler;
mod menu_handler;
mod one_shot_handler;
mod wizard_handler;

pub use command::{is_wizard_trigger, parse_command, Command, WIZARD_BUTTON};
pub use logging_handler::LoggingHandler;
pub use menu_handler::MenuHandler;
pub use one_shot_handler::OneShotHandler;
pub use wizard_handler::WizardHandler;
