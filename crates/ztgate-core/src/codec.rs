//! Best-effort decoding of chaincode results.
//!
//! Chaincode may return structured JSON (object/list query results) or a
//! plain text payload (a bare identifier, a human-readable message). Decoding
//! attempts a strict JSON parse and falls back to the raw text; it never
//! fails, and it establishes no guarantee about the decoded value's internal
//! shape beyond "valid JSON if parseable".

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A decoded chaincode payload.
///
/// Tagged so that consumers pattern-match exhaustively instead of probing
/// shape at runtime. Serializes untagged: envelopes carry the inner value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecodedPayload {
    /// The payload parsed as JSON.
    Json(Value),

    /// The payload was not valid JSON; the text is passed through verbatim.
    Text(String),
}

impl DecodedPayload {
    /// Get the JSON value, if the payload parsed as JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            DecodedPayload::Json(v) => Some(v),
            DecodedPayload::Text(_) => None,
        }
    }

    /// Get the raw text, if the payload fell back to text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DecodedPayload::Json(_) => None,
            DecodedPayload::Text(t) => Some(t),
        }
    }

    /// Check if the payload parsed as JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, DecodedPayload::Json(_))
    }
}

/// Decode raw chaincode bytes.
///
/// Strict JSON parse of the bytes interpreted as text; on parse failure the
/// text is returned as-is. Non-UTF8 input degrades to a lossy text view.
pub fn decode(raw: &[u8]) -> DecodedPayload {
    let text = String::from_utf8_lossy(raw);

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => DecodedPayload::Json(value),
        Err(_) => DecodedPayload::Text(text.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_decode_json_object() {
        let decoded = decode(br#"{"id":"t1","status":"open"}"#);
        assert_eq!(decoded, DecodedPayload::Json(json!({"id": "t1", "status": "open"})));
    }

    #[test]
    fn test_decode_json_list() {
        let decoded = decode(br#"[{"id":"m1"},{"id":"m2"}]"#);
        assert!(decoded.is_json());
    }

    #[test]
    fn test_decode_json_scalar() {
        assert_eq!(decode(b"42"), DecodedPayload::Json(json!(42)));
        assert_eq!(decode(b"true"), DecodedPayload::Json(json!(true)));
    }

    #[test]
    fn test_decode_text_fallback() {
        let decoded = decode(b"not-json");
        assert_eq!(decoded, DecodedPayload::Text("not-json".to_string()));
    }

    #[test]
    fn test_decode_empty_is_text() {
        assert_eq!(decode(b""), DecodedPayload::Text(String::new()));
    }

    #[test]
    fn test_decode_roundtrip() {
        let value = json!({"tasks": [{"id": "t1"}], "count": 1});
        let encoded = serde_json::to_vec(&value).unwrap();
        assert_eq!(decode(&encoded), DecodedPayload::Json(value));
    }

    #[test]
    fn test_payload_serializes_untagged() {
        let json = serde_json::to_string(&DecodedPayload::Json(json!({"a": 1}))).unwrap();
        assert_eq!(json, r#"{"a":1}"#);

        let text = serde_json::to_string(&DecodedPayload::Text("plain".to_string())).unwrap();
        assert_eq!(text, r#""plain""#);
    }

    proptest! {
        #[test]
        fn test_decode_never_panics(raw in prop::collection::vec(any::<u8>(), 0..512)) {
            let _ = decode(&raw);
        }

        #[test]
        fn test_text_fallback_preserves_input(s in "[A-Za-z ,;-]{1,64}") {
            prop_assume!(serde_json::from_str::<Value>(&s).is_err());

            let decoded = decode(s.as_bytes());
            prop_assert_eq!(decoded.clone(), DecodedPayload::Text(s));

            // Decoding the fallback again yields the same text.
            if let DecodedPayload::Text(t) = decoded {
                prop_assert_eq!(decode(t.as_bytes()), DecodedPayload::Text(t));
            }
        }
    }
}
