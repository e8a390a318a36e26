pub mod use_events;
pub mod use_session;

pub use use_events::{use_events, UseEventsHandle};
pub use use_session::{use_session, UseSessionHandle};
