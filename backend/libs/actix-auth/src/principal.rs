//! Request-scoped identity

use std::collections::HashSet;

use auth_core::{roles, Claims};

/// The in-process representation of "who is making this request".
///
/// One value type for every service: authorization logic depends only on
/// this capability set, never on per-service identity subclasses. Built once
/// per request from verified claims, immutable, owned by the request's
/// extensions, never persisted.
#[derive(Debug, Clone)]
pub struct Principal {
    username: String,
    user_id: Option<i64>,
    authorities: HashSet<String>,
}

impl Principal {
    pub fn new(
        username: impl Into<String>,
        user_id: Option<i64>,
        authorities: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            username: username.into(),
            user_id,
            authorities: authorities.into_iter().collect(),
        }
    }

    /// Project verified claims into a principal. A token without a role
    /// claim yields zero authorities, not all of them.
    pub fn from_claims(claims: &Claims) -> Self {
        Self::new(claims.sub.clone(), claims.user_id, claims.role_list())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    pub fn authorities(&self) -> &HashSet<String> {
        &self.authorities
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    pub fn is_admin(&self) -> bool {
        self.has_authority(roles::ADMIN)
    }
}

/// The raw bearer token from the inbound `Authorization` header.
///
/// Kept alongside the principal so outbound calls on the caller's behalf can
/// forward the exact same credential. Transient: dropped with the request,
/// never stored.
#[derive(Debug, Clone)]
pub struct BearerCredential(String);

impl BearerCredential {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}
