//! IAM Service - main entry point

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use tracing::info;

use actix_auth::BearerAuth;
use auth_core::{SigningKey, TokenIssuer, TokenVerifier};
use iam_service::{
    config::Settings,
    db::UserStore,
    routes,
    security::{Argon2Hashing, PasswordHashing},
    services::{EventPublisher, LogEventPublisher, UserCommandService, UserQueryService},
};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iam_service=info,info".into()),
        )
        .init();

    let settings = Settings::from_env().context("Failed to load configuration")?;
    info!(
        "Starting IAM service on {}:{}",
        settings.server.host, settings.server.port
    );

    let key = SigningKey::from_secret(&settings.jwt.secret);
    let issuer = Arc::new(TokenIssuer::new(key.clone(), settings.jwt.expiration_days));
    let verifier = Arc::new(TokenVerifier::new(key));

    let store = Arc::new(UserStore::new());
    let hashing: Arc<dyn PasswordHashing> = Arc::new(Argon2Hashing);
    let events: Arc<dyn EventPublisher> = Arc::new(LogEventPublisher);

    let commands = web::Data::new(UserCommandService::new(
        store.clone(),
        hashing,
        issuer,
        events,
    ));
    let queries = web::Data::new(UserQueryService::new(store));

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
