pub mod app;
pub mod details_modal;
pub mod event_form;
pub mod event_list;
pub mod ticket_list;
pub mod token_panel;

pub use app::App;
pub use details_modal::EventDetailsModal;
pub use event_form::EventForm;
pub use event_list::EventList;
pub use ticket_list::TicketList;
pub use token_panel::TokenPanel;
