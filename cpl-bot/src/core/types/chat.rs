//! Chat identity. The chat id doubles as the wizard's conversation id.

/// Chat (private, group or channel). `chat_type` is logged with every inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
