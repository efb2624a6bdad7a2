//! Inbound frame decoding and server-side timestamp stamping.
//!
//! The relay does not interpret frames beyond "is it a JSON object". The one
//! rewrite it performs is setting `timestamp` to the server time, discarding
//! whatever the client sent in that field.

use serde_json::{Map, Value};

use super::{error::FrameError, value_object::Timestamp};

/// Field overwritten on every relayed frame.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// A decoded inbound frame: any JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundFrame {
    fields: Map<String, Value>,
}

impl InboundFrame {
    /// Decode a text payload.
    pub fn parse(raw: &str) -> Result<Self, FrameError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| FrameError::Malformed(e.to_string()))?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(FrameError::NotAnObject(json_kind(&other))),
        }
    }

    /// Decode a binary payload holding UTF-8 JSON.
    pub fn parse_bytes(raw: &[u8]) -> Result<Self, FrameError> {
        let text = std::str::from_utf8(raw).map_err(|_| FrameError::InvalidUtf8)?;
        Self::parse(text)
    }

    /// The `type` discriminator, if present and a string.
    pub fn kind(&self) -> Option<&str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    /// The client-chosen `senderId`, if present and a string.
    pub fn sender_id(&self) -> Option<&str> {
        self.fields.get("senderId").and_then(Value::as_str)
    }

    /// Insert or overwrite `timestamp` with the server time.
    pub fn stamp(mut self, at: &Timestamp) -> StampedFrame {
        self.fields
            .insert(TIMESTAMP_FIELD.to_string(), Value::String(at.to_iso8601()));
        StampedFrame {
            fields: self.fields,
        }
    }
}

/// A frame carrying the server timestamp, ready to be broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct StampedFrame {
    fields: Map<String, Value>,
}

impl StampedFrame {
    pub fn timestamp(&self) -> Option<&str> {
        self.fields.get(TIMESTAMP_FIELD).and_then(Value::as_str)
    }

    pub fn encode(&self) -> Result<String, FrameError> {
        serde_json::to_string(&self.fields).map_err(|e| FrameError::Encode(e.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_shared::time::{Clock, FixedClock};

    fn server_time() -> Timestamp {
        Timestamp::new(FixedClock::from_millis(1_767_225_600_000).now())
    }

    #[test]
    fn test_stamp_inserts_timestamp() {
        // テスト項目: timestamp を持たないフレームにサーバー時刻が追加される
        // given (前提条件):
        let frame = InboundFrame::parse(r#"{"type":"text","content":"hi","senderId":"u1"}"#)
            .unwrap();

        // when (操作):
        let stamped = frame.stamp(&server_time());

        // then (期待する結果):
        let value: Value = serde_json::from_str(&stamped.encode().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "text",
                "content": "hi",
                "senderId": "u1",
                "timestamp": "2026-01-01T00:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_stamp_overwrites_client_timestamp() {
        // テスト項目: クライアントが送った timestamp はサーバー時刻で上書きされる
        // given (前提条件):
        let frame = InboundFrame::parse(
            r#"{"type":"text","content":"hi","senderId":"u1","timestamp":"1999-12-31T23:59:59.000Z"}"#,
        )
        .unwrap();

        // when (操作):
        let stamped = frame.stamp(&server_time());

        // then (期待する結果):
        assert_eq!(stamped.timestamp(), Some("2026-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_stamp_preserves_unknown_fields() {
        // テスト項目: 未知のフィールドやネストした値はそのまま保持される
        // given (前提条件):
        let frame = InboundFrame::parse(
            r#"{"type":"reaction","emoji":"🎉","meta":{"n":[1,2,3]},"timestamp":42}"#,
        )
        .unwrap();

        // when (操作):
        let encoded = frame.stamp(&server_time()).encode().unwrap();

        // then (期待する結果):
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["type"], "reaction");
        assert_eq!(value["emoji"], "🎉");
        assert_eq!(value["meta"]["n"], serde_json::json!([1, 2, 3]));
        assert_eq!(value["timestamp"], "2026-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_rejects_non_json() {
        // テスト項目: JSON でないペイロードは Malformed になる
        let result = InboundFrame::parse("not json");
        assert!(matches!(result, Err(FrameError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_non_object_json() {
        // テスト項目: オブジェクト以外の JSON は timestamp を持てないので拒否される
        assert_eq!(
            InboundFrame::parse("[1,2,3]"),
            Err(FrameError::NotAnObject("array"))
        );
        assert_eq!(
            InboundFrame::parse("\"hi\""),
            Err(FrameError::NotAnObject("string"))
        );
        assert_eq!(InboundFrame::parse("null"), Err(FrameError::NotAnObject("null")));
    }

    #[test]
    fn test_parse_bytes() {
        // テスト項目: UTF-8 のバイナリフレームは JSON として読み、それ以外は拒否する
        let frame = InboundFrame::parse_bytes(br#"{"type":"text","senderId":"u1"}"#).unwrap();
        assert_eq!(frame.kind(), Some("text"));
        assert_eq!(frame.sender_id(), Some("u1"));

        assert_eq!(
            InboundFrame::parse_bytes(&[0xff, 0xfe]),
            Err(FrameError::InvalidUtf8)
        );
    }

    #[test]
    fn test_object_without_type_is_accepted() {
        // テスト項目: type を持たないオブジェクトも中継対象になる
        let frame = InboundFrame::parse(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(frame.kind(), None);
        assert_eq!(
            frame.stamp(&server_time()).timestamp(),
            Some("2026-01-01T00:00:00.000Z")
        );
    }
}
