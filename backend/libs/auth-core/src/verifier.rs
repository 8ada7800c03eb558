//! Non-throwing token validation and typed claim readers

use tracing::warn;

use crate::claims::Claims;
use crate::codec;
use crate::error::TokenError;
use crate::key::SigningKey;

/// Validates bearer tokens against the shared key.
///
/// `verify` is the fail-closed boundary: any decode failure means "untrusted",
/// logged with its kind but never propagated. A malformed or expired token
/// must not surface as an error inside request handling. The claim readers
/// are meant to be called after `verify` returned true; on an unverified
/// token they return the codec's typed failure instead of panicking.
#[derive(Clone)]
pub struct TokenVerifier {
    key: SigningKey,
}

impl TokenVerifier {
    pub fn new(key: SigningKey) -> Self {
        Self { key }
    }

    pub fn verify(&self, token: &str) -> bool {
        match codec::decode(token, &self.key) {
            Ok(_) => true,
            Err(TokenError::SignatureInvalid) => {
                warn!("rejected bearer token: signature mismatch");
                false
            }
            Err(TokenError::Expired) => {
                warn!("rejected bearer token: expired");
                false
            }
            Err(err @ TokenError::Unsupported(_)) => {
                warn!(error = %err, "rejected bearer token: unsupported algorithm");
                false
            }
            Err(err @ TokenError::Malformed(_)) => {
                warn!(error = %err, "rejected bearer token: malformed");
                false
            }
        }
    }

    pub fn claims_of(&self, token: &str) -> Result<Claims, TokenError> {
        codec::decode(token, &self.key)
    }

    pub fn subject_of(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.claims_of(token)?.sub)
    }

    /// Roles carried by the token; empty when the claim is absent.
    pub fn roles_of(&self, token: &str) -> Result<Vec<String>, TokenError> {
        Ok(self.claims_of(token)?.role_list())
    }

    pub fn user_id_of(&self, token: &str) -> Result<Option<i64>, TokenError> {
        Ok(self.claims_of(token)?.user_id)
    }
}
