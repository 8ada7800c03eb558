//! Vehicles Service Library
//!
//! Vehicle listings. Browsing is public; everything that touches a specific
//! owner's data requires the caller's bearer token, verified locally against
//! the shared secret. The `/public/{id}` projection is what sibling services
//! consult when they validate a vehicle reference.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use error::{AppError, Result};
