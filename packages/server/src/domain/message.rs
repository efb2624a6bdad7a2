//! Wire messages exchanged with clients.

use serde::{Deserialize, Serialize};

use super::value_object::Timestamp;

/// Message type discriminator (`type` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    System,
    Text,
}

/// Notice sent by the server itself (e.g. the welcome frame)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMessage {
    pub r#type: MessageType,
    pub content: String,
    pub timestamp: String,
}

impl SystemMessage {
    pub fn new(content: impl Into<String>, at: &Timestamp) -> Self {
        Self {
            r#type: MessageType::System,
            content: content.into(),
            timestamp: at.to_iso8601(),
        }
    }
}

/// Chat message submitted by a client and relayed to everyone.
///
/// Clients leave `timestamp` empty; the relay always sets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub r#type: MessageType,
    pub content: String,
    pub sender_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ChatMessage {
    pub fn new(sender_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::Text,
            content: content.into(),
            sender_id: sender_id.into(),
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_shared::time::{Clock, FixedClock};

    #[test]
    fn test_system_message_wire_shape() {
        // テスト項目: SystemMessage が type/content/timestamp の JSON になる
        // given (前提条件):
        let at = Timestamp::new(FixedClock::from_millis(1_767_225_600_000).now());
        let message = SystemMessage::new("welcome", &at);

        // when (操作):
        let json = serde_json::to_value(&message).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "type": "system",
                "content": "welcome",
                "timestamp": "2026-01-01T00:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_chat_message_uses_sender_id_key() {
        // テスト項目: ChatMessage は senderId キーで送信され、timestamp は省略される
        // given (前提条件):
        let message = ChatMessage::new("u1", "hi");

        // when (操作):
        let json = serde_json::to_value(&message).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({"type": "text", "content": "hi", "senderId": "u1"})
        );
    }

    #[test]
    fn test_chat_message_parses_relayed_frame() {
        // テスト項目: relay から届いたフレームを ChatMessage として読める
        // given (前提条件):
        let raw = r#"{"type":"text","content":"hi","senderId":"u1","timestamp":"2026-01-01T00:00:00.000Z"}"#;

        // when (操作):
        let message: ChatMessage = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        assert_eq!(message.sender_id, "u1");
        assert_eq!(message.timestamp.as_deref(), Some("2026-01-01T00:00:00.000Z"));
    }
}
