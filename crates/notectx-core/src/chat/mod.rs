//! Chat messages and history windowing

pub mod export;
pub mod session;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use export::{chat_note, ChatNote, Timezone};
pub use session::{ChainSetup, ChatSession};

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Ai => "ai",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn visible_by_default() -> bool {
    true
}

/// One entry in a conversation. Immutable once appended to a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender: Sender,
    pub message: String,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
}

impl ChatMessage {
    pub fn user(message: impl Into<String>) -> Self {
        ChatMessage {
            sender: Sender::User,
            message: message.into(),
            is_visible: true,
        }
    }

    pub fn ai(message: impl Into<String>) -> Self {
        ChatMessage {
            sender: Sender::Ai,
            message: message.into(),
            is_visible: true,
        }
    }

    /// Same message, hidden from the rendered conversation
    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }
}

/// The trailing `size` messages ending at the most recent non-user message.
///
/// Anything the user typed after the last reply is excluded, so the window
/// always closes on a complete exchange. Empty when no reply exists yet.
pub fn window(history: &[ChatMessage], size: usize) -> &[ChatMessage] {
    let Some(last) = history.iter().rposition(|m| m.sender != Sender::User) else {
        return &[];
    };
    let end = last + 1;
    let start = end.saturating_sub(size);
    &history[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<ChatMessage> {
        vec![
            ChatMessage::user("U1"),
            ChatMessage::ai("A1"),
            ChatMessage::user("U2"),
            ChatMessage::ai("A2"),
            ChatMessage::user("U3"),
        ]
    }

    fn texts(messages: &[ChatMessage]) -> Vec<&str> {
        messages.iter().map(|m| m.message.as_str()).collect()
    }

    #[test]
    fn test_window_anchors_on_last_reply() {
        let history = history();
        assert_eq!(texts(window(&history, 2)), vec!["U2", "A2"]);
        assert_eq!(texts(window(&history[..3], 2)), vec!["U1", "A1"]);
    }

    #[test]
    fn test_window_clamps_at_start() {
        let history = history();
        assert_eq!(texts(window(&history, 10)), vec!["U1", "A1", "U2", "A2"]);
    }

    #[test]
    fn test_window_without_reply_is_empty() {
        let history = vec![ChatMessage::user("hello"), ChatMessage::user("anyone?")];
        assert!(window(&history, 4).is_empty());
        assert!(window(&[], 4).is_empty());
    }

    #[test]
    fn test_window_of_zero() {
        assert!(window(&history(), 0).is_empty());
    }

    #[test]
    fn test_hidden_messages_still_count() {
        let history = vec![ChatMessage::user("q"), ChatMessage::ai("seed").hidden()];
        assert_eq!(texts(window(&history, 1)), vec!["seed"]);
    }

    #[test]
    fn test_message_serde_shape() {
        let json = serde_json::to_value(ChatMessage::ai("hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sender": "ai", "message": "hi", "isVisible": true})
        );

        let parsed: ChatMessage =
            serde_json::from_str(r#"{"sender": "user", "message": "q"}"#).unwrap();
        assert!(parsed.is_visible);
    }
}
