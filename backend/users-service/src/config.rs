//! Configuration management for the users service

use anyhow::{ensure, Context, Result};
use auth_core::key::MIN_SECRET_LEN;
use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub jwt: JwtSettings,
    pub external: ExternalServices,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Ok(Settings {
            server: ServerSettings::from_env()?,
            jwt: JwtSettings::from_env()?,
            external: ExternalServices::from_env(),
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
                .unwrap_or_else(|_| "8082".to_string())
                .parse()
                .context("Invalid SERVER_PORT")?,
        })
    }
}

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

/// Base URLs of the sibling services this one consults.
#[derive(Debug, Clone)]
pub struct ExternalServices {
    pub plans_url: String,
}

impl ExternalServices {
    fn from_env() -> Self {
        Self {
            plans_url: env::var("PLANS_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8084".to_string()),
        }
    }
}
