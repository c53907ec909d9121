//! Calendar event types.
//!
//! Events are deliberately loosely typed: the store enforces no schema, so an
//! event is a required `id`, an optional `time`, and whatever other fields the
//! caller put on it. Unknown fields survive a load/save round-trip untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An event identifier, opaque to the store.
///
/// Callers supply either a number or a string; both round-trip through JSON
/// as-is. Equality is derived, so `Number(1)` and `Text("1")` are distinct ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId::Number(n)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId::Text(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId::Text(s)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,

    /// Time-of-day key used for sorting (e.g. "09:30"). Lexicographically
    /// sortable by convention; absent for untimed events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Any other fields the caller attached (title, description, ...).
    /// Preserved verbatim, never interpreted.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(id: impl Into<EventId>) -> Self {
        Event {
            id: id.into(),
            time: None,
            extra: Map::new(),
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The key [`sorted_events`](crate::sort::sorted_events) orders by.
    /// A missing `time` sorts as the empty string, i.e. first.
    pub fn sort_key(&self) -> &str {
        self.time.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_roundtrips_as_number_or_string() {
        let numeric: Event = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(numeric.id, EventId::Number(7));

        let textual: Event = serde_json::from_str(r#"{"id": "abc-123"}"#).unwrap();
        assert_eq!(textual.id, EventId::Text("abc-123".to_string()));

        assert_eq!(serde_json::to_string(&numeric).unwrap(), r#"{"id":7}"#);
    }

    #[test]
    fn numeric_and_textual_ids_are_distinct() {
        assert_ne!(EventId::Number(1), EventId::from("1"));
    }

    #[test]
    fn extra_fields_survive_roundtrip() {
        let json = r#"{"id":"e1","time":"10:00","title":"Standup","attendees":3}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.time.as_deref(), Some("10:00"));
        assert_eq!(event.extra["title"], Value::String("Standup".to_string()));
        assert_eq!(event.extra["attendees"], Value::from(3));

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(json).unwrap());
    }

    #[test]
    fn missing_time_is_omitted_when_serialized() {
        let event = Event::new("e1").with_field("title", "Dentist");
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("time"));
    }

    #[test]
    fn sort_key_defaults_to_empty() {
        assert_eq!(Event::new("e1").sort_key(), "");
        assert_eq!(Event::new("e1").with_time("09:00").sort_key(), "09:00");
    }
}
