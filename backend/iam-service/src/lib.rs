//! IAM Service Library
//!
//! Identity and access management: the only service that issues tokens.
//! Every other service verifies them independently against the same secret.
//!
//! ## Modules
//!
//! - `config`: service configuration
//! - `db`: user store
//! - `error`: error types
//! - `handlers`: HTTP endpoints
//! - `models`: user and role catalog
//! - `security`: password hashing
//! - `services`: sign-up/sign-in commands, user queries, event publishing

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;

pub use error::{AppError, Result};
