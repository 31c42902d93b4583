use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{CONTEXT_LAST_FLIGHT, CONTEXT_LAST_QUERY, CONTEXT_TIMESTAMP};

/// Server-issued conversation state, echoed back verbatim on every request.
///
/// The client never edits it. A successful response replaces it wholesale,
/// and the next request forwards it as-is (key order included). The only
/// reads are for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationContext(Map<String, Value>);

impl ConversationContext {
    /// Empty context used at session start.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a string field for display. Non-string values yield `None`.
    pub fn display_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    pub fn last_query(&self) -> Option<&str> {
        self.display_field(CONTEXT_LAST_QUERY)
    }

    pub fn last_flight(&self) -> Option<&str> {
        self.display_field(CONTEXT_LAST_FLIGHT)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.display_field(CONTEXT_TIMESTAMP)
    }
}

impl From<Map<String, Value>> for ConversationContext {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from_json(value: Value) -> ConversationContext {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn new_context_serializes_as_empty_object() {
        let c = ConversationContext::new();
        assert!(c.is_empty());
        assert_eq!(serde_json::to_string(&c).unwrap(), "{}");
    }

    #[test]
    fn display_fields_read_observed_keys() {
        let c = from_json(json!({
            "last_query": "Get information for flight TK123",
            "last_flight": "TK123",
            "timestamp": "2024-01-01T00:00:00Z"
        }));
        assert_eq!(c.last_query(), Some("Get information for flight TK123"));
        assert_eq!(c.last_flight(), Some("TK123"));
        assert_eq!(c.timestamp(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn display_field_ignores_non_strings() {
        let c = from_json(json!({ "last_flight": 42 }));
        assert_eq!(c.last_flight(), None);
        assert_eq!(c.timestamp(), None);
    }

    #[test]
    fn unknown_keys_survive_echo() {
        let raw = r#"{"timestamp":"t","zeta":{"nested":[1,2]},"alpha":null,"last_flight":"X1"}"#;
        let c: ConversationContext = serde_json::from_str(raw).unwrap();
        // Key order and extra fields come back untouched.
        assert_eq!(serde_json::to_string(&c).unwrap(), raw);
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(serde_json::from_str::<ConversationContext>("null").is_err());
        assert!(serde_json::from_str::<ConversationContext>("[1]").is_err());
        assert!(serde_json::from_str::<ConversationContext>("\"ctx\"").is_err());
    }
}
