//! Bearer authentication for actix-web services
//!
//! The [`BearerAuth`] middleware runs once per request, before routing: it
//! validates the `Authorization: Bearer` credential and, when trusted,
//! installs a [`Principal`] in the request's extensions. It never rejects a
//! request itself; an absent or invalid credential just leaves the request
//! anonymous, and routes that require authentication reject at extraction
//! time with the dedicated 401 entry point.
//!
//! The principal lives in the request's own extensions, so it cannot leak
//! across requests and is dropped on every exit path without any manual
//! clearing.

pub mod extractors;
pub mod middleware;
pub mod principal;

pub use extractors::AuthenticationRequired;
pub use middleware::BearerAuth;
pub use principal::{BearerCredential, Principal};
