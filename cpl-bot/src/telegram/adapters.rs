//! teloxide → core conversions.

use crate::core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Telegram user → core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram message → core [`Message`]. Non-text messages get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or(User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat),
            },
            content: self.0.text().unwrap_or_default().to_string(),
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> String {
    if chat.is_private() {
        "private"
    } else if chat.is_group() || chat.is_supergroup() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telegram_message(json: &str) -> teloxide::types::Message {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Ann".to_string(),
            last_name: Some("Lee".to_string()),
            username: Some("ann".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("ann".to_string()));
        assert_eq!(core_user.first_name, Some("Ann".to_string()));
        assert_eq!(core_user.last_name, Some("Lee".to_string()));
    }

    #[test]
    fn test_private_text_message_to_core() {
        let msg = telegram_message(
            r#"{"message_id":42,"date":1700000000,
                "chat":{"id":7,"type":"private","first_name":"Ann"},
                "from":{"id":7,"is_bot":false,"first_name":"Ann","username":"ann"},
                "text":"/cpl 20 35 30"}"#,
        );

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.id, "42");
        assert_eq!(core.conversation_id(), 7);
        assert_eq!(core.chat.chat_type, "private");
        assert_eq!(core.user.id, 7);
        assert_eq!(core.user.username.as_deref(), Some("ann"));
        assert_eq!(core.content, "/cpl 20 35 30");
    }

    /// Group replies share the group's session, keyed by the (negative) chat id, not the sender.
    #[test]
    fn test_group_message_keys_conversation_by_chat() {
        let msg = telegram_message(
            r#"{"message_id":5,"date":1700000000,
                "chat":{"id":-4001,"type":"group","title":"Media buyers"},
                "from":{"id":99,"is_bot":false,"first_name":"Bob"},
                "text":"20"}"#,
        );

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.conversation_id(), -4001);
        assert_eq!(core.chat.chat_type, "group");
        assert_eq!(core.user.id, 99);
        assert_eq!(core.user.username, None);
        assert_eq!(core.content, "20");
    }
}
