//! Filter + gate behavior over real actix request dispatch
//!
//! Every scenario drives a full service built with the BearerAuth middleware:
//! anonymous pass-through, 401 from the dedicated entry point, 403 for an
//! authenticated principal lacking a role, and per-request context isolation.

use std::sync::Arc;

use actix_auth::{BearerAuth, BearerCredential, Principal};
use actix_web::{test, web, App, HttpResponse};
use auth_core::{codec, roles, Claims, SigningKey, TokenIssuer, TokenVerifier};
use chrono::{Duration, Utc};

const SECRET: &str = "test-secret-key-min-32-chars-long!!!";

fn issuer() -> TokenIssuer {
    TokenIssuer::new(SigningKey::from_secret(SECRET), 7)
}

fn verifier() -> Arc<TokenVerifier> {
    Arc::new(TokenVerifier::new(SigningKey::from_secret(SECRET)))
}

fn user_token(subject: &str, user_id: i64) -> String {
    issuer()
        .issue_for_user(subject, vec![roles::USER.to_string()], user_id)
        .expect("token should issue")
}

fn admin_token(subject: &str, user_id: i64) -> String {
    issuer()
        .issue_for_user(
            subject,
            vec![roles::USER.to_string(), roles::ADMIN.to_string()],
            user_id,
        )
        .expect("token should issue")
}

fn expired_token(subject: &str) -> String {
    let now = Utc::now();
    let claims = Claims::new(
        subject,
        (now - Duration::days(2)).timestamp(),
        (now - Duration::days(1)).timestamp(),
    );
    codec::encode(&claims, &SigningKey::from_secret(SECRET)).expect("token should encode")
}

fn foreign_token(subject: &str) -> String {
    TokenIssuer::new(
        SigningKey::from_secret("another-secret-entirely-32-chars!!!!"),
        7,
    )
    .issue(subject)
    .expect("token should issue")
}

// ============ Test endpoints ============

async fn whoami(principal: Principal) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "username": principal.username(),
        "user_id": principal.user_id(),
        "authority_count": principal.authorities().len(),
    }))
}

async fn admin_only(principal: Principal) -> HttpResponse {
    if !principal.is_admin() {
        return HttpResponse::Forbidden()
            .json(serde_json::json!({"error": "Forbidden", "status": 403}));
    }
    HttpResponse::Ok().json(serde_json::json!({"username": principal.username()}))
}

async fn public_probe(credential: Option<BearerCredential>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "credential_present": credential.is_some(),
    }))
}

macro_rules! filter_app {
    () => {
        test::init_service(
            App::new()
                .wrap(BearerAuth::new(verifier()))
                .route("/whoami", web::get().to(whoami))
                .route("/admin", web::get().to(admin_only))
                .route("/public", web::get().to(public_probe)),
        )
        .await
    };
}

// ============ TESTS ============

#[actix_web::test]
async fn anonymous_request_reaches_public_route() {
    let app = filter_app!();

    let req = test::TestRequest::get().uri("/public").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["credential_present"], false);
}

#[actix_web::test]
async fn protected_route_without_credential_returns_401() {
    let app = filter_app!();

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("Unauthorized request detected"));
}

#[actix_web::test]
async fn non_bearer_authorization_header_is_treated_as_absent() {
    let app = filter_app!();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", "Basic YWxpY2U6cHc="))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn malformed_token_returns_401_on_protected_route() {
    let app = filter_app!();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn expired_token_returns_401_on_protected_route() {
    let app = filter_app!();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", format!("Bearer {}", expired_token("alice"))))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn foreign_signature_returns_401_on_protected_route() {
    let app = filter_app!();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", format!("Bearer {}", foreign_token("alice"))))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn valid_token_installs_principal_for_handler() {
    let app = filter_app!();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", format!("Bearer {}", user_token("alice", 42))))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["user_id"], 42);
    assert_eq!(body["authority_count"], 1);
}

#[actix_web::test]
async fn invalid_credential_does_not_block_public_route() {
    // The filter only populates context; rejection belongs to the routes
    // that require it. The raw credential stays available for forwarding.
    let app = filter_app!();

    let req = test::TestRequest::get()
        .uri("/public")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["credential_present"], true);
}

#[actix_web::test]
async fn token_without_roles_grants_zero_authorities() {
    let app = filter_app!();
    let token = issuer().issue("norole").expect("token should issue");

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["authority_count"], 0);

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn authenticated_without_admin_role_gets_403_not_401() {
    let app = filter_app!();

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header(("Authorization", format!("Bearer {}", user_token("alice", 42))))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn admin_role_passes_admin_gate() {
    let app = filter_app!();

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header(("Authorization", format!("Bearer {}", admin_token("root", 1))))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
}

#[actix_web::test]
async fn sequential_requests_have_independent_principals() {
    let app = filter_app!();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", format!("Bearer {}", user_token("alice", 1))))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["user_id"], 1);

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", format!("Bearer {}", user_token("bob", 2))))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["username"], "bob");
    assert_eq!(body["user_id"], 2);

    // And back to anonymous: nothing lingers from the previous credential.
    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}
