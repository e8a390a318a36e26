use base64ct::{Base64UrlUnpadded, Encoding};

use crate::models::{Identity, TokenClaims};
use crate::utils::{load_string, save_string, STORAGE_KEY_TOKEN};

/// Where the bearer token lives between page loads. Kept behind a trait so
/// tests can substitute an in-memory store.
pub trait SessionStore {
    fn load(&self) -> String;
    fn save(&self, token: &str);
}

/// localStorage-backed store, origin-scoped, single browser tab assumed.
#[derive(Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> String {
        load_string(STORAGE_KEY_TOKEN)
    }

    fn save(&self, token: &str) {
        save_string(STORAGE_KEY_TOKEN, token);
    }
}

/// Best-effort decode of the token payload. Splits the compact form on '.',
/// requires exactly three segments, base64url-decodes the middle one and
/// parses it as JSON claims. Every failure collapses to None: an unreadable
/// token means "no identity", not an error.
pub fn decode_identity(token: &str) -> Option<Identity> {
    let parts = token.split('.').collect::<Vec<&str>>();
    if parts.len() != 3 {
        return None;
    }

    let payload = Base64UrlUnpadded::decode_vec(parts[1]).ok()?;
    let claims = serde_json::from_slice::<TokenClaims>(&payload).ok()?;

    Identity::from_claims(claims)
}

/// Status badge shown next to the save button.
pub fn token_status(token: &str) -> String {
    if token.is_empty() {
        return "no token".to_string();
    }
    match decode_identity(token) {
        Some(identity) => format!("logat ca {} [{}]", identity.username, identity.roles_label()),
        None => "token invalid / no token".to_string(),
    }
}

/// Authorization header value, or None when no token is saved. Doubles as
/// the guard that keeps bearer-auth calls from ever being attempted without
/// a token.
pub fn bearer(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {}", token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MemorySessionStore(RefCell<String>);

    impl SessionStore for MemorySessionStore {
        fn load(&self) -> String {
            self.0.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.0.borrow_mut() = token.to_string();
        }
    }

    fn make_token(payload: &str) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"RS256","typ":"JWT"}"#);
        let body = Base64UrlUnpadded::encode_string(payload.as_bytes());
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn decodes_a_structurally_valid_token() {
        let token = make_token(
            r#"{"preferred_username":"ana","realm_access":{"roles":["ADMIN","USER"]}}"#,
        );
        let identity = decode_identity(&token).unwrap();
        assert_eq!(identity.username, "ana");
        assert!(identity.roles.contains("ADMIN"));
        assert!(identity.can_manage_events());
    }

    #[test]
    fn falls_back_to_email_then_sub() {
        let token = make_token(r#"{"email":"ana@example.com"}"#);
        assert_eq!(decode_identity(&token).unwrap().username, "ana@example.com");

        let token = make_token(r#"{"sub":"abc-123"}"#);
        assert_eq!(decode_identity(&token).unwrap().username, "abc-123");
    }

    #[test]
    fn malformed_tokens_soft_fail_to_no_identity() {
        assert!(decode_identity("").is_none());
        assert!(decode_identity("one-segment").is_none());
        assert!(decode_identity("two.segments").is_none());
        assert!(decode_identity("a.b.c.d").is_none());
        // three segments but garbage base64
        assert!(decode_identity("x.@@not-base64@@.z").is_none());
        // valid base64 but not JSON
        let token = format!(
            "h.{}.s",
            Base64UrlUnpadded::encode_string(b"plain text payload")
        );
        assert!(decode_identity(&token).is_none());
    }

    #[test]
    fn status_labels() {
        assert_eq!(token_status(""), "no token");
        assert_eq!(token_status("garbage"), "token invalid / no token");

        let token = make_token(
            r#"{"preferred_username":"ana","realm_access":{"roles":["ORGANIZER"]}}"#,
        );
        assert_eq!(token_status(&token), "logat ca ana [ORGANIZER]");
    }

    #[test]
    fn bearer_guard_refuses_empty_tokens() {
        assert!(bearer("").is_none());
        assert_eq!(bearer("abc").as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn session_store_contract_roundtrip() {
        let store = MemorySessionStore(RefCell::new(String::new()));
        assert_eq!(store.load(), "");
        store.save("my-token");
        assert_eq!(store.load(), "my-token");
        store.save("");
        assert_eq!(store.load(), "");
    }
}
