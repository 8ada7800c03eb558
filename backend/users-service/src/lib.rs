//! Users Service Library
//!
//! Customer profiles. A profile references a user (by the id embedded in
//! the caller's token) and optionally a subscription plan owned by the
//! plans service; the plan reference is validated over HTTP with the
//! caller's own bearer token before a profile is accepted.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use error::{AppError, Result};
