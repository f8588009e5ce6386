//! # cpl-calc
//!
//! Lead economics core: the CPL [`calculator`], the one-shot argument parser, and the
//! per-conversation [`wizard`] that collects inputs step by step. Transport-agnostic; the bot
//! runtime owns a [`SessionStore`] and passes it into [`Wizard`] operations.

pub mod calculator;
pub mod economics;
pub mod error;
pub mod one_shot;
pub mod parse;
pub mod store;
pub mod wizard;

pub use calculator::{calculate, compute, round4, CplResult};
pub use economics::{LeadEconomics, PartialEconomics, DEFAULT_ROI, DEFAULT_TRASH_RATE};
pub use error::{CalcError, Result};
pub use one_shot::{compute_one_shot, parse_one_shot, MIN_ONE_SHOT_ARGS};
pub use parse::parse_number;
pub use store::{ConversationId, InMemorySessionStore, SessionStore};
pub use wizard::{Transition, Wizard, WizardOutcome, WizardSession, WizardStep};
