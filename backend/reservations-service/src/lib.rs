//! Reservations Service Library
//!
//! Reservations reference a vehicle (vehicles-service) and a user profile
//! (users-service) by id only. Before a reservation is accepted, both
//! references are confirmed over HTTP with the caller's forwarded bearer
//! token; a reference that cannot be confirmed - missing or service down,
//! deliberately indistinguishable - rejects the command.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use error::{AppError, Result};
