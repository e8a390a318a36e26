use serde::{Deserialize, Serialize};

/// Event as served by GET /events. Every field is default-tolerant so a
/// partially filled payload still renders instead of failing the whole list.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Event {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub total_tickets: i64,
    #[serde(default)]
    pub tickets_sold: i64,
    #[serde(default)]
    pub remaining_tickets: i64,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Event {
    /// Counts line under each event row, e.g. "40 / 100 (left 60)".
    pub fn ticket_counts_label(&self) -> String {
        format!(
            "{} / {} (left {})",
            self.tickets_sold, self.total_tickets, self.remaining_tickets
        )
    }

    /// Location and start time on one line, blanks where unknown.
    pub fn meta_line(&self) -> String {
        format!(
            "{} • {}",
            self.location.as_deref().unwrap_or(""),
            self.starts_at.as_deref().unwrap_or("")
        )
    }
}

/// Sanitize an /events response body. Anything that is not an array becomes
/// the empty list, and array elements that do not deserialize are dropped
/// rather than trusted.
pub fn events_from_value(value: &serde_json::Value) -> Vec<Event> {
    let Some(items) = value.as_array() else {
        log::error!("❌ /events returned a non-array body, ignoring it");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<Event>(item.clone()) {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("⚠️ Dropping malformed event entry: {}", e);
                None
            }
        })
        .collect()
}

/// Body of POST /events. Field names are the wire contract.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct EventDraft {
    pub name: String,
    pub location: String,
    pub starts_at: String,
    pub total_tickets: u32,
    pub description: String,
}
