pub mod mock_bot;

use cpl_bot::{Chat, Message, User};

/// Incoming text message in the given chat.
pub fn text_message(chat_id: i64, content: &str) -> Message {
    Message {
        id: format!("{}-{}", chat_id, content.len()),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
    }
}
