//! Shared JWT module for all services
//!
//! Every service verifies bearer tokens with this library against the same
//! process-wide HS256 secret; only iam-service issues them. Keeping one
//! implementation prevents claim-name or algorithm drift between services.
//!
//! - `claims`: the claim set carried inside a token
//! - `codec`: signed encode/decode with a typed failure taxonomy
//! - `issuer`: token construction (iat/exp stamping, role claims)
//! - `verifier`: non-throwing validation plus typed claim readers

pub mod claims;
pub mod codec;
pub mod error;
pub mod issuer;
pub mod key;
pub mod verifier;

pub use claims::{roles, Claims};
pub use error::TokenError;
pub use issuer::TokenIssuer;
pub use key::SigningKey;
pub use verifier::TokenVerifier;
