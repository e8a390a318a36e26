// Remote gateway - HTTP only, stateless. No retries, no timeouts, no
// caching: every operation is one request/response pair triggered by a
// user action.

use gloo_net::http::Request;
use serde_json::Value;

use crate::models::{events_from_value, Event, EventDraft};
use crate::services::session_service::bearer;
use crate::utils::API_BASE;

/// GET /events (public). The body is sanitized at this boundary: anything
/// that is not an array of events comes back as the empty list.
pub async fn list_events() -> Result<Vec<Event>, String> {
    let url = format!("{}/events", API_BASE);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let body = response
        .json::<Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(events_from_value(&body))
}

/// GET /events/{id} (public). Feeds the details modal.
pub async fn get_event(event_id: i64) -> Result<Event, String> {
    let url = format!("{}/events/{}", API_BASE, event_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        ));
    }

    response
        .json::<Event>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// POST /events (bearer). Whatever the server answers is the result: the
/// body is pretty-printed verbatim into the status area without branching
/// on the HTTP status code.
pub async fn create_event(token: &str, draft: &EventDraft) -> Result<String, String> {
    let auth = bearer(token).ok_or_else(|| "No token saved".to_string())?;

    let url = format!("{}/events", API_BASE);
    let response = Request::post(&url)
        .header("Authorization", &auth)
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let body = response
        .json::<Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(pretty(&body))
}

/// POST /events/{id}/tickets (bearer). Same contract as create_event: any
/// JSON body is a displayable result.
pub async fn buy_ticket(token: &str, event_id: i64) -> Result<Value, String> {
    let auth = bearer(token).ok_or_else(|| "No token saved".to_string())?;

    let url = format!("{}/events/{}/tickets", API_BASE, event_id);
    let response = Request::post(&url)
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// GET /my-tickets (bearer). Returns the raw body; the caller derives both
/// the structured list and the raw preview from it.
pub async fn list_my_tickets(token: &str) -> Result<Value, String> {
    let auth = bearer(token).ok_or_else(|| "No token saved".to_string())?;

    let url = format!("{}/my-tickets", API_BASE);
    let response = Request::get(&url)
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Two-space pretty JSON for the debug previews.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Text of the blocking alert shown after a purchase attempt.
pub fn ticket_alert_message(body: &Value) -> String {
    format!("Ticket response:\n{}", pretty(body))
}
