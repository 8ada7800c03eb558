//! Process-wide signing key

use jsonwebtoken::{DecodingKey, EncodingKey};

/// Secrets shorter than this are trivially brute-forceable for HS256;
/// service configuration rejects them at startup.
pub const MIN_SECRET_LEN: usize = 32;

/// The shared HMAC secret wrapped into encoding/decoding form once at
/// startup. Immutable for the process lifetime; no rotation.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}
