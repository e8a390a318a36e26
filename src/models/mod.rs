pub mod event;
pub mod identity;
pub mod ticket;

pub use event::{events_from_value, Event, EventDraft};
pub use identity::{Identity, RealmAccess, TokenClaims};
pub use ticket::{format_timestamp, tickets_from_value, Ticket};
