//! Configuration management for the vehicles service

use anyhow::{ensure, Context, Result};
use auth_core::key::MIN_SECRET_LEN;
use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub jwt: JwtSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Ok(Settings {
            server: ServerSettings::from_env()?,
            jwt: JwtSettings::from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .context("Invalid SERVER_PORT")?,
        })
    }
}

/// Verification-only: this service never signs tokens, it only checks them
/// against the same `JWT_SECRET` the IAM service signs with.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
}

impl JwtSettings {
    fn from_env() -> Result<Self> {
        let secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        ensure!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT_SECRET must be at least {} characters",
            MIN_SECRET_LEN
        );
        Ok(Self { secret })
    }
}
