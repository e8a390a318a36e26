/// Base URL of the ticketing API.
/// Configured at compile time via .env (see build.rs):
/// - Default: http://localhost:3005
/// - Override: EVENTFLOW_API_URL env var
pub const API_BASE: &str = match option_env!("EVENTFLOW_API_URL") {
    Some(url) => url,
    None => "http://localhost:3005",
};

/// Keycloak account console for the eventflow realm. Linked from the token
/// panel so the user can grab a fresh token; never called over the API.
pub const ACCOUNT_URL: &str = match option_env!("EVENTFLOW_ACCOUNT_URL") {
    Some(url) => url,
    None => "http://localhost:8080/realms/eventflow/account/",
};

/// localStorage key holding the raw bearer token.
pub const STORAGE_KEY_TOKEN: &str = "eventflow_token";

/// Roles allowed to create events.
pub const MANAGER_ROLES: [&str; 2] = ["ADMIN", "ORGANIZER"];
