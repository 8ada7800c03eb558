//! Sign-up / sign-in / protected-route flows over real request dispatch

use std::sync::Arc;

use actix_auth::BearerAuth;
use actix_web::{test, web, App};
use auth_core::{roles, SigningKey, TokenIssuer, TokenVerifier};
use iam_service::{
    db::UserStore,
    routes,
    security::{Argon2Hashing, PasswordHashing},
    services::{EventPublisher, LogEventPublisher, UserCommandService, UserQueryService},
};

const SECRET: &str = "test-secret-key-min-32-chars-long!!!";

macro_rules! iam_app {
    () => {{
        let key = SigningKey::from_secret(SECRET);
        let issuer = Arc::new(TokenIssuer::new(key.clone(), 7));
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

        test::init_service(
            App::new()
                .wrap(BearerAuth::new(verifier))
                .app_data(commands)
                .app_data(queries)
                .configure(routes::configure),
        )
        .await
    }};
}

macro_rules! sign_up {
    ($app:expr, $username:expr, $roles:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/authentication/sign-up")
            .set_json(serde_json::json!({
                "username": $username,
                "password": "s3cret-pa55word",
                "email": format!("{}@example.com", $username),
                "roles": $roles,
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&$app, req).await;
        body
    }};
}

macro_rules! sign_in_token {
    ($app:expr, $username:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/authentication/sign-in")
            .set_json(serde_json::json!({
                "username": $username,
                "password": "s3cret-pa55word",
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&$app, req).await;
        body["token"]
            .as_str()
            .expect("sign-in returns token")
            .to_string()
    }};
}

#[actix_web::test]
async fn sign_up_creates_user_with_default_role() {
    let app = iam_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/authentication/sign-up")
        .set_json(serde_json::json!({
            "username": "alice",
            "password": "s3cret-pa55word",
            "email": "alice@example.com",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["roles"], serde_json::json!(["ROLE_USER"]));
    assert!(body["id"].as_i64().is_some());
}

#[actix_web::test]
async fn duplicate_username_is_a_conflict() {
    let app = iam_app!();
    sign_up!(app, "alice", serde_json::json!(null));

    let req = test::TestRequest::post()
        .uri("/api/v1/authentication/sign-up")
        .set_json(serde_json::json!({
            "username": "alice",
            "password": "another-pa55word",
            "email": "alice2@example.com",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);
}

#[actix_web::test]
async fn unknown_role_is_a_validation_error() {
    let app = iam_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/authentication/sign-up")
        .set_json(serde_json::json!({
            "username": "alice",
            "password": "s3cret-pa55word",
            "email": "alice@example.com",
            "roles": ["ROLE_SUPERUSER"],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn sign_in_returns_a_verifiable_token() {
    let app = iam_app!();
    let created = sign_up!(app, "alice", serde_json::json!(["ROLE_USER"]));

    let req = test::TestRequest::post()
        .uri("/api/v1/authentication/sign-in")
        .set_json(serde_json::json!({
            "username": "alice",
            "password": "s3cret-pa55word",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["username"], "alice");

    let token = body["token"].as_str().expect("token present");
    let verifier = TokenVerifier::new(SigningKey::from_secret(SECRET));
    assert!(verifier.verify(token));
    assert_eq!(verifier.subject_of(token).unwrap(), "alice");
    assert_eq!(
        verifier.roles_of(token).unwrap(),
        vec![roles::USER.to_string()]
    );
    assert_eq!(
        verifier.user_id_of(token).unwrap(),
        created["id"].as_i64()
    );
}

#[actix_web::test]
async fn sign_in_with_wrong_password_is_unauthorized() {
    let app = iam_app!();
    sign_up!(app, "alice", serde_json::json!(null));

    let req = test::TestRequest::post()
        .uri("/api/v1/authentication/sign-in")
        .set_json(serde_json::json!({
            "username": "alice",
            "password": "wrong-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn user_listing_requires_authentication() {
    let app = iam_app!();

    let req = test::TestRequest::get().uri("/api/v1/users").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("Unauthorized request detected"));
}

#[actix_web::test]
async fn user_listing_requires_admin_role() {
    let app = iam_app!();
    sign_up!(app, "alice", serde_json::json!(["ROLE_USER"]));
    let token = sign_in_token!(app, "alice");

    let req = test::TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn admin_can_list_users() {
    let app = iam_app!();
    sign_up!(app, "alice", serde_json::json!(["ROLE_USER"]));
    sign_up!(app, "root", serde_json::json!(["ROLE_ADMIN"]));
    let token = sign_in_token!(app, "root");

    let req = test::TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(|users| users.len()), Some(2));
}

#[actix_web::test]
async fn authenticated_user_can_be_fetched_by_id_and_username() {
    let app = iam_app!();
    let created = sign_up!(app, "alice", serde_json::json!(null));
    let token = sign_in_token!(app, "alice");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", created["id"]))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["username"], "alice");

    let req = test::TestRequest::get()
        .uri("/api/v1/users/username/alice")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], created["id"]);
}

#[actix_web::test]
async fn user_fetch_without_token_is_unauthorized() {
    let app = iam_app!();
    sign_up!(app, "alice", serde_json::json!(null));

    let req = test::TestRequest::get().uri("/api/v1/users/1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}
