//! Step-by-step input dialog.
//!
//! One [`WizardSession`] per conversation walks a fixed sequence:
//!
//! ```text
//! AwaitingPayout → AwaitingApprove → AwaitingTrash → AwaitingRoi → Complete
//! ```
//!
//! Each accepted reply fills the field of the current step and moves forward; there is no way
//! back. On `Complete` the session is removed from the store and the calculator runs once.
//! Invalid replies leave the session untouched so the same field can be retried.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculator::{compute, CplResult};
use crate::economics::PartialEconomics;
use crate::error::{CalcError, Result};
use crate::parse::parse_number;
use crate::store::{ConversationId, SessionStore};

/// Field the wizard is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    AwaitingPayout,
    AwaitingApprove,
    AwaitingTrash,
    AwaitingRoi,
}

/// Result of [`WizardStep::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Await(WizardStep),
    Complete,
}

impl WizardStep {
    /// All steps in dialog order.
    pub const SEQUENCE: [WizardStep; 4] = [
        WizardStep::AwaitingPayout,
        WizardStep::AwaitingApprove,
        WizardStep::AwaitingTrash,
        WizardStep::AwaitingRoi,
    ];

    /// Transition table. Strictly forward.
    pub fn advance(self) -> Transition {
        match self {
            WizardStep::AwaitingPayout => Transition::Await(WizardStep::AwaitingApprove),
            WizardStep::AwaitingApprove => Transition::Await(WizardStep::AwaitingTrash),
            WizardStep::AwaitingTrash => Transition::Await(WizardStep::AwaitingRoi),
            WizardStep::AwaitingRoi => Transition::Complete,
        }
    }

    /// Short field name, used in logs.
    pub fn field(self) -> &'static str {
        match self {
            WizardStep::AwaitingPayout => "payout",
            WizardStep::AwaitingApprove => "approve_rate",
            WizardStep::AwaitingTrash => "trash_rate",
            WizardStep::AwaitingRoi => "roi",
        }
    }

    /// 1-based position in [`WizardStep::SEQUENCE`].
    pub fn number(self) -> usize {
        match self {
            WizardStep::AwaitingPayout => 1,
            WizardStep::AwaitingApprove => 2,
            WizardStep::AwaitingTrash => 3,
            WizardStep::AwaitingRoi => 4,
        }
    }
}

/// Per-conversation dialog state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSession {
    pub step: WizardStep,
    pub partial: PartialEconomics,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    /// Fresh session waiting for the payout.
    pub fn new() -> Self {
        Self {
            step: WizardStep::AwaitingPayout,
            partial: PartialEconomics::default(),
        }
    }

    /// True when exactly the fields of the steps before `step` are filled. Anything else cannot
    /// be reached through [`Wizard`] and means the stored session is corrupt.
    pub fn is_consistent(&self) -> bool {
        WizardStep::SEQUENCE.iter().all(|&s| {
            let filled = slot(&self.partial, s).is_some();
            filled == (s.number() < self.step.number())
        })
    }

    fn record(&mut self, value: f64) {
        *slot_mut(&mut self.partial, self.step) = Some(value);
    }
}

fn slot(partial: &PartialEconomics, step: WizardStep) -> Option<f64> {
    match step {
        WizardStep::AwaitingPayout => partial.payout,
        WizardStep::AwaitingApprove => partial.approve_rate,
        WizardStep::AwaitingTrash => partial.trash_rate,
        WizardStep::AwaitingRoi => partial.roi,
    }
}

fn slot_mut(partial: &mut PartialEconomics, step: WizardStep) -> &mut Option<f64> {
    match step {
        WizardStep::AwaitingPayout => &mut partial.payout,
        WizardStep::AwaitingApprove => &mut partial.approve_rate,
        WizardStep::AwaitingTrash => &mut partial.trash_rate,
        WizardStep::AwaitingRoi => &mut partial.roi,
    }
}

/// What the caller should tell the user after a successful [`Wizard::submit_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WizardOutcome {
    /// No session for this conversation; the text is not a wizard reply.
    NotInDialog,
    /// Value accepted; prompt for the given step.
    Next(WizardStep),
    /// Last value accepted; session removed.
    Completed(CplResult),
}

/// Wizard operations over a borrowed [`SessionStore`].
pub struct Wizard<'s, S: SessionStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: SessionStore + ?Sized> Wizard<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Starts (or restarts) the dialog. An existing session is replaced without notice.
    /// Returns the first step so the caller can prompt for it.
    pub fn start_session(&self, conversation_id: ConversationId) -> WizardStep {
        let session = WizardSession::new();
        let step = session.step;
        if let Some(previous) = self.store.get(conversation_id) {
            info!(
                chat_id = conversation_id,
                discarded_step = previous.step.field(),
                discarded_fields = previous.partial.filled(),
                "Wizard restarted, previous session discarded"
            );
        } else {
            info!(chat_id = conversation_id, "Wizard session started");
        }
        self.store.set(conversation_id, session);
        step
    }

    /// Current session, if the conversation is in a dialog.
    pub fn session(&self, conversation_id: ConversationId) -> Option<WizardSession> {
        self.store.get(conversation_id)
    }

    /// Feeds one user reply into the dialog.
    ///
    /// Errors:
    /// - [`CalcError::NonNumericArgument`]: reply rejected, session unchanged.
    /// - [`CalcError::InvalidSessionState`]: stored session was corrupt and has been deleted.
    /// - [`CalcError::DegenerateInput`]: dialog finished but the result is not finite; session deleted.
    pub fn submit_value(
        &self,
        conversation_id: ConversationId,
        raw_text: &str,
    ) -> Result<WizardOutcome> {
        let Some(mut session) = self.store.get(conversation_id) else {
            debug!(chat_id = conversation_id, "No wizard session, ignoring text");
            return Ok(WizardOutcome::NotInDialog);
        };

        if !session.is_consistent() {
            warn!(
                chat_id = conversation_id,
                step = session.step.field(),
                "Wizard session in invalid state, deleting"
            );
            self.store.delete(conversation_id);
            return Err(CalcError::InvalidSessionState);
        }

        let Some(value) = parse_number(raw_text) else {
            debug!(
                chat_id = conversation_id,
                step = session.step.field(),
                "Wizard reply is not a number"
            );
            return Err(CalcError::NonNumericArgument(raw_text.trim().to_string()));
        };

        session.record(value);
        debug!(
            chat_id = conversation_id,
            step = session.step.field(),
            value = value,
            "Wizard value recorded"
        );

        match session.step.advance() {
            Transition::Await(next) => {
                session.step = next;
                self.store.set(conversation_id, session);
                Ok(WizardOutcome::Next(next))
            }
            Transition::Complete => {
                self.store.delete(conversation_id);
                let input = session.partial.finish()?;
                let result = compute(&input).inspect_err(|_| {
                    warn!(chat_id = conversation_id, ?input, "Wizard finished with degenerate input");
                })?;
                info!(
                    chat_id = conversation_id,
                    breakeven = result.breakeven,
                    lead_price = result.lead_price,
                    "Wizard completed"
                );
                Ok(WizardOutcome::Completed(result))
            }
        }
    }
}
