use serde::{Deserialize, Serialize};

use crate::models::event::Event;

/// Ticket as served by /my-tickets, with an optional nested event summary.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Ticket {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub event_id: i64,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub purchased_at: Option<String>,
    #[serde(default)]
    pub event: Option<Event>,
}

impl Ticket {
    /// Event name, falling back to the raw event id.
    pub fn event_label(&self) -> String {
        match &self.event {
            Some(event) if !event.name.is_empty() => event.name.clone(),
            _ => format!("event #{}", self.event_id),
        }
    }

    /// Event start time when known, otherwise the purchase time. An empty
    /// start string counts as unknown.
    pub fn when_label(&self) -> String {
        let raw = self
            .event
            .as_ref()
            .and_then(|event| event.starts_at.as_deref())
            .filter(|value| !value.is_empty())
            .or_else(|| {
                self.purchased_at
                    .as_deref()
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or("");
        format_timestamp(raw)
    }
}

/// "2025-12-31T20:00:00" → "2025-12-31 20:00". Unparsable input is shown raw
/// rather than hidden.
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Same sanitization rule as the events list: non-array → empty list,
/// malformed elements dropped.
pub fn tickets_from_value(value: &serde_json::Value) -> Vec<Ticket> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| serde_json::from_value::<Ticket>(item.clone()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_label_prefers_nested_name() {
        let ticket = Ticket {
            event_id: 7,
            event: Some(Event {
                name: "Gala".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(ticket.event_label(), "Gala");
    }

    #[test]
    fn event_label_falls_back_to_raw_id() {
        let ticket = Ticket {
            event_id: 7,
            ..Default::default()
        };
        assert_eq!(ticket.event_label(), "event #7");

        // nested event present but nameless still falls back
        let nameless = Ticket {
            event_id: 3,
            event: Some(Event::default()),
            ..Default::default()
        };
        assert_eq!(nameless.event_label(), "event #3");
    }

    #[test]
    fn when_label_prefers_event_start_over_purchase_time() {
        let ticket = Ticket {
            purchased_at: Some("2025-11-01T09:30:00".into()),
            event: Some(Event {
                starts_at: Some("2025-12-31T20:00:00".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(ticket.when_label(), "2025-12-31 20:00");

        let no_event = Ticket {
            purchased_at: Some("2025-11-01T09:30:00".into()),
            ..Default::default()
        };
        assert_eq!(no_event.when_label(), "2025-11-01 09:30");

        // an empty start string falls through to the purchase time
        let blank_start = Ticket {
            purchased_at: Some("2025-11-01T09:30:00".into()),
            event: Some(Event {
                starts_at: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(blank_start.when_label(), "2025-11-01 09:30");
    }

    #[test]
    fn timestamps_fall_back_to_raw_text() {
        assert_eq!(format_timestamp("soon-ish"), "soon-ish");
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("2025-12-31T20:00:00Z"), "2025-12-31 20:00");
    }

    #[test]
    fn non_array_tickets_body_clears_the_list() {
        assert!(tickets_from_value(&json!({"error": "No token provided"})).is_empty());

        let tickets = tickets_from_value(&json!([
            {"id": 1, "event_id": 7, "code": "AB12CD", "purchased_at": "2025-11-01T09:30:00"}
        ]));
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].code.as_deref(), Some("AB12CD"));
    }
}
