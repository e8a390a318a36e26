use std::collections::HashSet;

use serde::Deserialize;

use crate::utils::MANAGER_ROLES;

/// The token payload fields the client cares about. The decode is purely
/// informational: no signature verification happens here, the server
/// re-checks every request anyway.
#[derive(Deserialize, Debug, Default)]
pub struct TokenClaims {
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub realm_access: Option<RealmAccess>,
}

#[derive(Deserialize, Debug, Default)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Display name and role set derived from a decodable token.
#[derive(Clone, PartialEq, Debug)]
pub struct Identity {
    pub username: String,
    pub roles: HashSet<String>,
}

impl Identity {
    /// Username fallback chain: preferred_username → email → sub.
    /// Empty strings fall through like missing claims; a payload carrying
    /// none of the three yields no identity.
    pub fn from_claims(claims: TokenClaims) -> Option<Self> {
        let username = non_empty(claims.preferred_username)
            .or_else(|| non_empty(claims.email))
            .or_else(|| non_empty(claims.sub))?;
        let roles = claims
            .realm_access
            .map(|access| access.roles.into_iter().collect())
            .unwrap_or_default();
        Some(Self { username, roles })
    }

    /// Whether the event-creation form should be offered at all.
    pub fn can_manage_events(&self) -> bool {
        MANAGER_ROLES.iter().any(|role| self.roles.contains(*role))
    }

    /// Roles joined for the status badge, in stable order.
    pub fn roles_label(&self) -> String {
        let mut roles: Vec<&str> = self.roles.iter().map(String::as_str).collect();
        roles.sort_unstable();
        roles.join(", ")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_with_roles(roles: &[&str]) -> Identity {
        Identity {
            username: "ana".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn username_fallback_chain() {
        let full = TokenClaims {
            preferred_username: Some("ana".into()),
            email: Some("ana@example.com".into()),
            sub: Some("abc-123".into()),
            ..Default::default()
        };
        assert_eq!(Identity::from_claims(full).unwrap().username, "ana");

        let email_only = TokenClaims {
            email: Some("ana@example.com".into()),
            sub: Some("abc-123".into()),
            ..Default::default()
        };
        assert_eq!(
            Identity::from_claims(email_only).unwrap().username,
            "ana@example.com"
        );

        let sub_only = TokenClaims {
            sub: Some("abc-123".into()),
            ..Default::default()
        };
        assert_eq!(Identity::from_claims(sub_only).unwrap().username, "abc-123");

        assert!(Identity::from_claims(TokenClaims::default()).is_none());
    }

    #[test]
    fn empty_string_claims_fall_through_the_chain() {
        let claims = TokenClaims {
            preferred_username: Some(String::new()),
            email: Some(String::new()),
            sub: Some("abc-123".into()),
            ..Default::default()
        };
        assert_eq!(Identity::from_claims(claims).unwrap().username, "abc-123");

        let all_empty = TokenClaims {
            preferred_username: Some(String::new()),
            email: Some(String::new()),
            sub: Some(String::new()),
            ..Default::default()
        };
        assert!(Identity::from_claims(all_empty).is_none());
    }

    #[test]
    fn missing_realm_access_means_no_roles() {
        let claims = TokenClaims {
            preferred_username: Some("ana".into()),
            ..Default::default()
        };
        let identity = Identity::from_claims(claims).unwrap();
        assert!(identity.roles.is_empty());
        assert!(!identity.can_manage_events());
    }

    #[test]
    fn creation_gate_requires_admin_or_organizer() {
        assert!(identity_with_roles(&["ADMIN"]).can_manage_events());
        assert!(identity_with_roles(&["ORGANIZER", "USER"]).can_manage_events());
        assert!(!identity_with_roles(&["USER"]).can_manage_events());
        assert!(!identity_with_roles(&[]).can_manage_events());
        // role comparison is exact, not case-folded
        assert!(!identity_with_roles(&["admin"]).can_manage_events());
    }

    #[test]
    fn roles_label_is_sorted_and_comma_joined() {
        let identity = identity_with_roles(&["USER", "ADMIN"]);
        assert_eq!(identity.roles_label(), "ADMIN, USER");
    }
}
