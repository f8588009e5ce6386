//! Session storage keyed by conversation. The bot runtime owns one store and hands it to
//! [`crate::Wizard`]; nothing in this crate keeps sessions in a global.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::wizard::WizardSession;

/// Conversation identifier (Telegram chat id).
pub type ConversationId = i64;

/// Get/set/delete access to wizard sessions. Implementations must isolate conversations.
pub trait SessionStore: Send + Sync {
    fn get(&self, conversation_id: ConversationId) -> Option<WizardSession>;
    /// Inserts or replaces the session for the conversation.
    fn set(&self, conversation_id: ConversationId, session: WizardSession);
    /// Removes the session, returning it if one existed.
    fn delete(&self, conversation_id: ConversationId) -> Option<WizardSession>;
}

/// Process-local store. Sessions are lost on restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<ConversationId, WizardSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ConversationId, WizardSession>> {
        // Writes are single insert/remove calls, so a poisoned map is still consistent.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, conversation_id: ConversationId) -> Option<WizardSession> {
        self.lock().get(&conversation_id).cloned()
    }

    fn set(&self, conversation_id: ConversationId, session: WizardSession) {
        self.lock().insert(conversation_id, session);
    }

    fn delete(&self, conversation_id: ConversationId) -> Option<WizardSession> {
        self.lock().remove(&conversation_id)
    }
}
