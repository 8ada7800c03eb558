//! Token failure taxonomy

use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// The four distinct ways a token can fail to decode.
///
/// Callers must be able to tell these apart from each other and from "no
/// token was presented"; absence never reaches the codec. At the request
/// boundary all four collapse to "unauthenticated"; the kind is for logs.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("token signature does not match")]
    SignatureInvalid,

    #[error("token is expired")]
    Expired,

    #[error("unsupported token algorithm: {0}")]
    Unsupported(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                TokenError::Unsupported(err.to_string())
            }
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}
