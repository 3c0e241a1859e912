//! Todo Item
//!
//! Records exchanged with the backend and their JSON decoding.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ProtocolError;

/// Backend-assigned identifier.
///
/// Opaque to the client. Backends send either a JSON string or a JSON
/// integer; both are kept as text since the id is only ever echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => TodoId(s),
            RawId::Signed(n) => TodoId(n.to_string()),
            RawId::Unsigned(n) => TodoId(n.to_string()),
        })
    }
}

/// A todo item as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub name: String,
    pub category: String,
    pub complete: bool,
}

/// Fields of a create request; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewTodoItem {
    pub name: String,
    pub category: String,
    pub complete: bool,
}

/// Decode a `createTodoItem` response body
pub fn decode_item(body: &str) -> Result<TodoItem, ProtocolError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a `getTodoItems` response body, keeping backend order
pub fn decode_items(body: &str) -> Result<Vec<TodoItem>, ProtocolError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_item_with_numeric_id() {
        let item = decode_item(r#"{"id":7,"name":"Buy milk","category":"Errands","complete":false}"#)
            .expect("decode failed");

        assert_eq!(item.id, TodoId::new("7"));
        assert_eq!(item.name, "Buy milk");
        assert_eq!(item.category, "Errands");
        assert!(!item.complete);
    }

    #[test]
    fn test_decode_item_with_string_id_and_trailing_newline() {
        // Server responses end with a newline
        let body = "{\"category\":\"Home\",\"complete\":true,\"id\":\"a1b2\",\"name\":\"Sweep\"}\n";
        let item = decode_item(body).expect("decode failed");

        assert_eq!(item.id.as_str(), "a1b2");
        assert!(item.complete);
    }

    #[test]
    fn test_decode_items_preserves_order() {
        let body = r#"[
            {"id":"2","name":"b","category":"x","complete":false},
            {"id":"1","name":"a","category":"x","complete":true},
            {"id":"3","name":"c","category":"y","complete":false}
        ]"#;
        let items = decode_items(body).expect("decode failed");

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_decode_rejects_invalid_method_body() {
        // Single-quoted, so not JSON
        let err = decode_items("{'error': 'Invalid method'}").unwrap_err();
        assert!(matches!(err, ProtocolError::Decode(_)));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TodoId::new("42")).unwrap();
        assert_eq!(json, r#""42""#);
    }
}
