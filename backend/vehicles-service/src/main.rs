//! Vehicles Service - main entry point

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use tracing::info;

use actix_auth::BearerAuth;
use auth_core::{SigningKey, TokenVerifier};
use vehicles_service::{config::Settings, db::VehicleStore, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vehicles_service=info,info".into()),
        )
        .init();

    let settings = Settings::from_env().context("Failed to load configuration")?;
    info!(
        "Starting vehicles service on {}:{}",
        settings.server.host, settings.server.port
    );

    let verifier = Arc::new(TokenVerifier::new(SigningKey::from_secret(
        &settings.jwt.secret,
    )));
    let store = web::Data::new(VehicleStore::new());

    HttpServer::new(move || {
        App::new()
            .wrap(BearerAuth::new(verifier.clone()))
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind((settings.server.host.as_str(), settings.server.port))
    .context("Failed to bind server socket")?
    .run()
    .await?;

    Ok(())
}
