//! Signed encode/decode of the claim set
//!
//! HS256 only. A token whose header names any other algorithm decodes to
//! `TokenError::Unsupported`, never to a weaker validation path.

use jsonwebtoken::{Algorithm, Header, Validation};

use crate::claims::Claims;
use crate::error::TokenError;
use crate::key::SigningKey;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Encode a claim set into a compact signed token.
///
/// Rejects claim sets that violate the token invariants (empty subject,
/// expiry not after issue time) before anything is signed.
pub fn encode(claims: &Claims, key: &SigningKey) -> Result<String, TokenError> {
    if claims.sub.trim().is_empty() {
        return Err(TokenError::Malformed("subject must not be empty".into()));
    }
    if claims.exp <= claims.iat {
        return Err(TokenError::Malformed(
            "expiry must be after issue time".into(),
        ));
    }

    jsonwebtoken::encode(&Header::new(ALGORITHM), claims, key.encoding()).map_err(Into::into)
}

/// Decode and validate a compact token back into its claim set.
///
/// Fails with `SignatureInvalid`, `Malformed`, `Expired`, or `Unsupported`.
/// Expiry is exact (zero leeway) so a token is untrusted from the first
/// second past `exp`.
pub fn decode(token: &str, key: &SigningKey) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;

    jsonwebtoken::decode::<Claims>(token, key.decoding(), &validation)
        .map(|data| data.claims)
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn test_key() -> SigningKey {
        SigningKey::from_secret("test-secret-key-min-32-chars-long!!!")
    }

    fn valid_claims() -> Claims {
        let now = Utc::now();
        let mut claims = Claims::new(
            "alice",
            now.timestamp(),
            (now + Duration::days(7)).timestamp(),
        );
        claims.roles = Some(vec!["ROLE_USER".to_string()]);
        claims.authorities = claims.roles.clone();
        claims.user_id = Some(7);
        claims
    }

    #[test]
    fn round_trip_preserves_claims() {
        let key = test_key();
        let claims = valid_claims();

        let token = encode(&claims, &key).unwrap();
        let decoded = decode(&token, &key).unwrap();

        assert_eq!(decoded, claims);
    }

    #[test]
    fn token_has_three_segments() {
        let token = encode(&valid_claims(), &test_key()).unwrap();
        assert_eq!(token.matches('.').count(), 2);
    }

    #[test]
    fn wrong_key_fails_with_signature_invalid() {
        let token = encode(&valid_claims(), &test_key()).unwrap();
        let other = SigningKey::from_secret("another-secret-entirely-32-chars!!!!");

        let err = decode(&token, &other).unwrap_err();
        assert!(matches!(err, TokenError::SignatureInvalid));
    }

    #[test]
    fn expired_token_fails_with_expired() {
        let key = test_key();
        let now = Utc::now();
        let claims = Claims::new(
            "alice",
            (now - Duration::days(2)).timestamp(),
            (now - Duration::days(1)).timestamp(),
        );

        let token = encode(&claims, &key).unwrap();
        let err = decode(&token, &key).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
    }

    #[test]
    fn garbage_fails_with_malformed() {
        let err = decode("not.a.token", &test_key()).unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn foreign_algorithm_fails_with_unsupported() {
        // Same secret, but signed as HS384; the decode path must refuse it
        // rather than validate under a different algorithm.
        let key = test_key();
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS384),
            &valid_claims(),
            &jsonwebtoken::EncodingKey::from_secret(b"test-secret-key-min-32-chars-long!!!"),
        )
        .unwrap();

        let err = decode(&token, &key).unwrap_err();
        assert!(matches!(err, TokenError::Unsupported(_)));
    }

    #[test]
    fn empty_subject_is_rejected_before_signing() {
        let now = Utc::now();
        let claims = Claims::new("", now.timestamp(), (now + Duration::days(1)).timestamp());

        let err = encode(&claims, &test_key()).unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn expiry_not_after_issue_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims::new("alice", now, now);

        let err = encode(&claims, &test_key()).unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }
}
