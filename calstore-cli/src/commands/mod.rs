pub mod add;
pub mod date;
pub mod delete;
pub mod list;
pub mod update;
pub mod view;

use anyhow::{Result, anyhow};
use calstore_core::{Event, EventId};
use serde_json::Value;

/// Parse a CLI id argument. Numeric input becomes a numeric id so it matches
/// events stored with JSON number ids; everything else stays a string.
pub fn parse_event_id(input: &str) -> EventId {
    match input.parse::<i64>() {
        Ok(n) => EventId::Number(n),
        Err(_) => EventId::Text(input.to_string()),
    }
}

/// Parse a `key=value` field argument. Values that parse as JSON are stored
/// structured (numbers, booleans, ...); anything else is kept as a string.
pub fn parse_field(input: &str) -> Result<(String, Value)> {
    let (key, raw) = input
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid field \"{}\", expected key=value", input))?;

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Assemble an event from the shared add/update arguments.
pub fn build_event(
    id: EventId,
    title: Option<String>,
    time: Option<String>,
    fields: Vec<String>,
) -> Result<Event> {
    let mut event = Event::new(id);
    event.time = time;

    if let Some(title) = title {
        event = event.with_field("title", title);
    }
    for field in &fields {
        let (key, value) = parse_field(field)?;
        event.extra.insert(key, value);
    }

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_event_id ---

    #[test]
    fn numeric_input_becomes_number_id() {
        assert_eq!(parse_event_id("42"), EventId::Number(42));
    }

    #[test]
    fn non_numeric_input_stays_text() {
        assert_eq!(parse_event_id("local-abc"), EventId::from("local-abc"));
        assert_eq!(parse_event_id("1.5"), EventId::from("1.5"));
    }

    // --- parse_field ---

    #[test]
    fn field_values_parse_as_json_when_possible() {
        assert_eq!(parse_field("count=3").unwrap().1, Value::from(3));
        assert_eq!(parse_field("done=true").unwrap().1, Value::from(true));
    }

    #[test]
    fn field_values_fall_back_to_string() {
        let (key, value) = parse_field("location=Room 4").unwrap();
        assert_eq!(key, "location");
        assert_eq!(value, Value::String("Room 4".to_string()));
    }

    #[test]
    fn field_without_equals_is_rejected() {
        assert!(parse_field("justakey").is_err());
    }

    #[test]
    fn field_value_may_contain_equals() {
        let (_, value) = parse_field("note=a=b").unwrap();
        assert_eq!(value, Value::String("a=b".to_string()));
    }

    // --- build_event ---

    #[test]
    fn build_event_collects_title_time_and_fields() {
        let event = build_event(
            "e1".into(),
            Some("Standup".to_string()),
            Some("09:30".to_string()),
            vec!["location=HQ".to_string()],
        )
        .unwrap();

        assert_eq!(event.time.as_deref(), Some("09:30"));
        assert_eq!(event.extra["title"], "Standup");
        assert_eq!(event.extra["location"], "HQ");
    }
}
