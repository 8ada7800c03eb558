//! Claim set carried inside a signed bearer token

use serde::{Deserialize, Serialize};

/// Role names shared across services.
///
/// Stored in tokens and checked by handlers; the `ROLE_` prefix is part of
/// the wire value, not a convention handlers may strip.
pub mod roles {
    pub const USER: &str = "ROLE_USER";
    pub const ADMIN: &str = "ROLE_ADMIN";
    pub const MODERATOR: &str = "ROLE_MODERATOR";
}

/// JWT claim set.
///
/// `roles` and `authorities` carry the same list when present; `authorities`
/// exists so role gates that read that claim name keep working. A token
/// without either claim grants zero authorities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username, unique, non-empty)
    pub sub: String,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration time (Unix timestamp, seconds); must be after `iat`
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorities: Option<Vec<String>>,
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl Claims {
    pub fn new(subject: impl Into<String>, issued_at: i64, expires_at: i64) -> Self {
        Self {
            sub: subject.into(),
            iat: issued_at,
            exp: expires_at,
            roles: None,
            authorities: None,
            user_id: None,
        }
    }

    /// Role list, reading `roles` first and falling back to `authorities`.
    /// Empty when neither claim is present.
    pub fn role_list(&self) -> Vec<String> {
        self.roles
            .clone()
            .or_else(|| self.authorities.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_serializes_camel_case() {
        let mut claims = Claims::new("alice", 1_000, 2_000);
        claims.user_id = Some(42);

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["userId"], 42);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn absent_role_claims_are_omitted_from_wire() {
        let claims = Claims::new("alice", 1_000, 2_000);

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("roles").is_none());
        assert!(json.get("authorities").is_none());
    }

    #[test]
    fn role_list_is_empty_when_no_claim_present() {
        let claims = Claims::new("alice", 1_000, 2_000);
        assert!(claims.role_list().is_empty());
    }

    #[test]
    fn role_list_falls_back_to_authorities() {
        let mut claims = Claims::new("alice", 1_000, 2_000);
        claims.authorities = Some(vec![roles::USER.to_string()]);
        assert_eq!(claims.role_list(), vec![roles::USER.to_string()]);
    }
}
