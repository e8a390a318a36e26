use yew::prelude::*;

use crate::models::Event;

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub events: Vec<Event>,
    pub loading: bool,
    pub on_reload: Callback<()>,
    pub on_buy: Callback<i64>,
    pub on_details: Callback<i64>,
}

#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    html! {
        <div class="card">
            <h2>{"2. Events"}</h2>
            <button
                class="btn btn-secondary"
                onclick={props.on_reload.reform(|_| ())}
                disabled={props.loading}
            >
                {if props.loading { "Loading..." } else { "Refresh events" }}
            </button>
            <div class="event-rows">
                // the placeholder only shows when nothing is in flight
                if props.events.is_empty() && !props.loading {
                    <p>{"No events yet."}</p>
                }
                { for props.events.iter().map(|event| {
                    let on_buy = {
                        let on_buy = props.on_buy.clone();
                        let id = event.id;
                        Callback::from(move |_| on_buy.emit(id))
                    };
                    let on_details = {
                        let on_details = props.on_details.clone();
                        let id = event.id;
                        Callback::from(move |_| on_details.emit(id))
                    };

                    html! {
                        <div class="event-row" key={event.id}>
                            <div>
                                <strong>{&event.name}</strong>
                                <div class="meta">
                                    {event.meta_line()}
                                    <br />
                                    {format!("Tickets: {}", event.ticket_counts_label())}
                                </div>
                            </div>
                            <div class="row">
                                <button class="btn btn-secondary" onclick={on_details}>
                                    {"Details"}
                                </button>
                                <button class="btn" onclick={on_buy}>
                                    {"Buy ticket"}
                                </button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
