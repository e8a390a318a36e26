use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::EventDraft;

#[derive(Properties, PartialEq)]
pub struct EventFormProps {
    /// Raw server response of the last create attempt, shown verbatim.
    pub result: String,
    pub on_create: Callback<EventDraft>,
}

/// Create-event form, only mounted for ADMIN / ORGANIZER identities.
/// Fields are deliberately not cleared after submission; drafts survive
/// until the page reloads.
#[function_component(EventForm)]
pub fn event_form(props: &EventFormProps) -> Html {
    let name_ref = use_node_ref();
    let location_ref = use_node_ref();
    let starts_at_ref = use_node_ref();
    let total_tickets_ref = use_node_ref();
    let description_ref = use_node_ref();

    let on_submit = {
        let name_ref = name_ref.clone();
        let location_ref = location_ref.clone();
        let starts_at_ref = starts_at_ref.clone();
        let total_tickets_ref = total_tickets_ref.clone();
        let description_ref = description_ref.clone();
        let on_create = props.on_create.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name), Some(location), Some(starts_at), Some(total), Some(description)) = (
                name_ref.cast::<HtmlInputElement>(),
                location_ref.cast::<HtmlInputElement>(),
                starts_at_ref.cast::<HtmlInputElement>(),
                total_tickets_ref.cast::<HtmlInputElement>(),
                description_ref.cast::<HtmlTextAreaElement>(),
            ) {
                let draft = EventDraft {
                    name: name.value(),
                    location: location.value(),
                    starts_at: starts_at.value(),
                    total_tickets: total.value().parse().unwrap_or(0),
                    description: description.value(),
                };
                on_create.emit(draft);
            }
        })
    };

    html! {
        <div class="card">
            <h2>{"3. Create event (ADMIN / ORGANIZER)"}</h2>
            <form onsubmit={on_submit}>
                <label class="field-label" for="ev-name">{"Name"}</label>
                <input id="ev-name" type="text" ref={name_ref} />

                <label class="field-label" for="ev-location">{"Location"}</label>
                <input id="ev-location" type="text" ref={location_ref} />

                <label class="field-label" for="ev-starts-at">{"Starts at (ISO 8601)"}</label>
                <input
                    id="ev-starts-at"
                    type="text"
                    placeholder="2025-12-31T20:00:00"
                    ref={starts_at_ref}
                />

                <label class="field-label" for="ev-tickets">{"Total tickets"}</label>
                <input
                    id="ev-tickets"
                    type="number"
                    min="1"
                    placeholder="100"
                    ref={total_tickets_ref}
                />

                <label class="field-label" for="ev-description">{"Description"}</label>
                <textarea id="ev-description" rows="2" ref={description_ref} />

                <button type="submit" class="btn">{"Create event"}</button>
            </form>
            <pre class="debug">{props.result.clone()}</pre>
        </div>
    }
}
