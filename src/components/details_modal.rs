use yew::prelude::*;

use crate::models::{format_timestamp, Event};

#[derive(Properties, PartialEq)]
pub struct EventDetailsModalProps {
    pub event: Event,
    pub on_close: Callback<()>,
}

#[function_component(EventDetailsModal)]
pub fn event_details_modal(props: &EventDetailsModalProps) -> Html {
    let event = &props.event;

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={props.on_close.reform(|_| ())}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{&event.name}</h2>
                    <button class="btn-close" onclick={props.on_close.reform(|_| ())}>
                        {"✕"}
                    </button>
                </div>

                <div class="modal-body">
                    <div class="detail-section">
                        <div class="detail-label">{"Location"}</div>
                        <div class="detail-value">
                            {event.location.clone().unwrap_or_else(|| "-".to_string())}
                        </div>
                    </div>

                    <div class="detail-section">
                        <div class="detail-label">{"Starts at"}</div>
                        <div class="detail-value">
                            {format_timestamp(event.starts_at.as_deref().unwrap_or("-"))}
                        </div>
                    </div>

                    <div class="detail-section">
                        <div class="detail-label">{"Tickets"}</div>
                        <div class="detail-value">{event.ticket_counts_label()}</div>
                    </div>

                    if let Some(description) = &event.description {
                        if !description.is_empty() {
                            <div class="detail-section">
                                <div class="detail-label">{"Description"}</div>
                                <div class="detail-value">{description.clone()}</div>
                            </div>
                        }
                    }
                </div>

                <div class="modal-footer">
                    <button class="btn btn-secondary" onclick={props.on_close.reform(|_| ())}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
