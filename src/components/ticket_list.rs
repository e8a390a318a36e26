use yew::prelude::*;

use crate::models::Ticket;

#[derive(Properties, PartialEq)]
pub struct TicketListProps {
    pub tickets: Vec<Ticket>,
    /// Raw /my-tickets body (or status text), always rendered beneath the
    /// structured rows.
    pub raw: String,
    pub on_load: Callback<()>,
}

#[function_component(TicketList)]
pub fn ticket_list(props: &TicketListProps) -> Html {
    html! {
        <div class="card">
            <h2>{"4. My tickets"}</h2>
            <button class="btn btn-secondary" onclick={props.on_load.reform(|_| ())}>
                {"Load my tickets"}
            </button>
            <div class="ticket-rows">
                { for props.tickets.iter().map(|ticket| html! {
                    <div class="ticket-row" key={ticket.id}>
                        <strong>{ticket.event_label()}</strong>
                        <div class="meta">{ticket.when_label()}</div>
                        if let Some(code) = &ticket.code {
                            <span class="ticket-code">{code.clone()}</span>
                        }
                    </div>
                }) }
            </div>
            <pre class="debug">{props.raw.clone()}</pre>
        </div>
    }
}
