use web_sys::window;
use yew::prelude::*;

use crate::hooks::{use_events, use_session};
use crate::models::{tickets_from_value, Event, EventDraft, Ticket};
use crate::services::{
    buy_ticket, create_event, get_event, list_my_tickets, pretty, ticket_alert_message,
};

use super::{EventDetailsModal, EventForm, EventList, TicketList, TokenPanel};

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let events = use_events();

    let create_result = use_state(String::new);
    let tickets = use_state(Vec::<Ticket>::new);
    let tickets_raw = use_state(String::new);
    let details = use_state(|| None::<Event>);

    // Create event, then re-fetch the list exactly once. Any JSON the server
    // answers with is the result, success or not.
    let on_create = {
        let token = session.token.clone();
        let create_result = create_result.clone();
        let reload = events.reload.clone();

        Callback::from(move |draft: EventDraft| {
            create_result.set("Sending...".to_string());

            let token = (*token).clone();
            if token.is_empty() {
                create_result.set("Please paste an ADMIN / ORGANIZER token first.".to_string());
                return;
            }

            let create_result = create_result.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (status, reload_events) = settle_create(create_event(&token, &draft).await);
                create_result.set(status);
                if reload_events {
                    reload.emit(());
                }
            });
        })
    };

    // Buy a ticket; every outcome ends in a blocking alert.
    let on_buy = {
        let token = session.token.clone();
        let reload = events.reload.clone();

        Callback::from(move |event_id: i64| {
            let token = (*token).clone();
            if token.is_empty() {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("Please paste your token first.");
                }
                return;
            }

            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (message, reload_events) = settle_purchase(buy_ticket(&token, event_id).await);
                if let Some(win) = window() {
                    let _ = win.alert_with_message(&message);
                }
                if reload_events {
                    reload.emit(());
                }
            });
        })
    };

    // Load my tickets: structured rows plus the raw body underneath.
    let on_load_tickets = {
        let token = session.token.clone();
        let tickets = tickets.clone();
        let tickets_raw = tickets_raw.clone();

        Callback::from(move |_| {
            let token = (*token).clone();
            if token.is_empty() {
                tickets.set(Vec::new());
                tickets_raw.set("Please paste your token first.".to_string());
                return;
            }

            tickets_raw.set("Loading...".to_string());

            let tickets = tickets.clone();
            let tickets_raw = tickets_raw.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match list_my_tickets(&token).await {
                    Ok(body) => {
                        tickets.set(tickets_from_value(&body));
                        tickets_raw.set(pretty(&body));
                    }
                    Err(e) => {
                        log::error!("❌ Error loading tickets: {}", e);
                        tickets.set(Vec::new());
                        tickets_raw.set(e);
                    }
                }
            });
        })
    };

    // Details modal, backed by GET /events/{id}.
    let on_details = {
        let details = details.clone();
        Callback::from(move |event_id: i64| {
            let details = details.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match get_event(event_id).await {
                    Ok(event) => details.set(Some(event)),
                    Err(e) => log::error!("❌ Error loading event {}: {}", event_id, e),
                }
            });
        })
    };

    let on_close_details = {
        let details = details.clone();
        Callback::from(move |_| details.set(None))
    };

    let can_manage = (*session.identity)
        .as_ref()
        .map_or(false, |identity| identity.can_manage_events());

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"EventFlow"}</h1>
            </header>

            <TokenPanel
                token={(*session.token).clone()}
                status={(*session.status).clone()}
                on_edit={session.edit.clone()}
                on_save={session.save.clone()}
            />

            <div class="columns">
                <div class="column">
                    <EventList
                        events={(*events.events).clone()}
                        loading={*events.loading}
                        on_reload={events.reload.clone()}
                        on_buy={on_buy}
                        on_details={on_details}
                    />
                </div>

                <div class="column">
                    if can_manage {
                        <EventForm
                            result={(*create_result).clone()}
                            on_create={on_create}
                        />
                    } else {
                        <div class="card">
                            <h2>{"3. Create event (ADMIN / ORGANIZER)"}</h2>
                            <p class="hint">
                                {"Creating events requires a saved ADMIN or ORGANIZER token."}
                            </p>
                        </div>
                    }

                    <TicketList
                        tickets={(*tickets).clone()}
                        raw={(*tickets_raw).clone()}
                        on_load={on_load_tickets}
                    />
                </div>
            </div>

            if let Some(event) = (*details).clone() {
                <EventDetailsModal {event} on_close={on_close_details} />
            }
        </div>
    }
}

// Helper functions

/// Settle a create attempt: the status text to show, and whether the events
/// list must be re-fetched. Only a gateway result triggers the single
/// refetch; a failed request does not.
fn settle_create(result: Result<String, String>) -> (String, bool) {
    match result {
        Ok(body) => (body, true),
        Err(e) => {
            log::error!("❌ Error creating event: {}", e);
            (e, false)
        }
    }
}

/// Settle a purchase attempt: the alert text, and whether the events list
/// must be re-fetched.
fn settle_purchase(result: Result<serde_json::Value, String>) -> (String, bool) {
    match result {
        Ok(body) => (ticket_alert_message(&body), true),
        Err(e) => {
            log::error!("❌ Error buying ticket: {}", e);
            (format!("Error: {}", e), false)
        }
    }
}
