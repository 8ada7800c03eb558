//! Users Service - main entry point

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use tracing::info;

use actix_auth::BearerAuth;
use auth_core::{SigningKey, TokenVerifier};
use users_service::{
    config::Settings,
    db::ProfileStore,
    routes,
    services::{ExternalPlans, ProfileCommandService, ProfileQueryService},
};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_service=info,info".into()),
        )
        .init();

    let settings = Settings::from_env().context("Failed to load configuration")?;
    info!(
        "Starting users service on {}:{}",
        settings.server.host, settings.server.port
    );

    let verifier = Arc::new(TokenVerifier::new(SigningKey::from_secret(
        &settings.jwt.secret,
    )));

    let store = Arc::new(ProfileStore::new());
    let plans = Arc::new(ExternalPlans::new(&settings.external.plans_url));

    let commands = web::Data::new(ProfileCommandService::new(store.clone(), plans));
    let queries = web::Data::new(ProfileQueryService::new(store));

    HttpServer::new(move || {
        App::new()
            .wrap(BearerAuth::new(verifier.clone()))
            .wrap(Cors::permissive())
            .app_data(commands.clone())
            .app_data(queries.clone())
            .configure(routes::configure)
    })
    .bind((settings.server.host.as_str(), settings.server.port))
    .context("Failed to bind server socket")?
    .run()
    .await?;

    Ok(())
}
