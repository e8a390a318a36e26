pub mod api_client;
pub mod session_service;

pub use api_client::*;
pub use session_service::*;
