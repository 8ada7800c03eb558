//! Token construction

use chrono::{Duration, Utc};

use crate::claims::Claims;
use crate::codec;
use crate::error::TokenError;
use crate::key::SigningKey;

/// Builds signed tokens with `iat = now` and `exp = now + ttl`.
///
/// Only iam-service holds one of these; every other service holds a
/// [`crate::TokenVerifier`] over the same key. Pure apart from reading the
/// clock.
#[derive(Clone)]
pub struct TokenIssuer {
    key: SigningKey,
    expiration_days: i64,
}

impl TokenIssuer {
    pub fn new(key: SigningKey, expiration_days: i64) -> Self {
        Self {
            key,
            expiration_days,
        }
    }

    pub fn expiration_days(&self) -> i64 {
        self.expiration_days
    }

    /// Issue a token carrying only the subject. The claim set has no role
    /// list at all; consumers must treat that as zero authorities.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.build(subject, None, None)
    }

    /// Issue a token carrying the subject and its roles. The role list is
    /// written to both `roles` and `authorities`.
    pub fn issue_with_roles(&self, subject: &str, roles: Vec<String>) -> Result<String, TokenError> {
        self.build(subject, Some(roles), None)
    }

    /// Issue the full user token: subject, roles, and the user id the
    /// downstream services embed into their principals.
    pub fn issue_for_user(
        &self,
        subject: &str,
        roles: Vec<String>,
        user_id: i64,
    ) -> Result<String, TokenError> {
        self.build(subject, Some(roles), Some(user_id))
    }

    fn build(
        &self,
        subject: &str,
        roles: Option<Vec<String>>,
        user_id: Option<i64>,
    ) -> Result<String, TokenError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::days(self.expiration_days);

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            authorities: roles.clone(),
            roles,
            user_id,
        };

        codec::encode(&claims, &self.key)
    }
}
