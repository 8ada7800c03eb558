//! Authentication endpoints - sign-up and sign-in
//!
//! Both routes are public; they are the only way to obtain a bearer token.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::User;
use crate::services::{SignInCommand, SignUpCommand, UserCommandService};

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResource {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl UserResource {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            roles: user.role_names(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthenticatedUserResource {
    pub id: i64,
    pub username: String,
    pub token: String,
}

/// Create a new account
pub async fn sign_up(
    commands: web::Data<UserCommandService>,
    request: web::Json<SignUpRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let user = commands.handle_sign_up(SignUpCommand {
        username: request.username,
        password: request.password,
        email: request.email,
        roles: request.roles,
    })?;

    Ok(HttpResponse::Created().json(UserResource::from_user(&user)))
}

/// Authenticate and return a bearer token
pub async fn sign_in(
    commands: web::Data<UserCommandService>,
    request: web::Json<SignInRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let authenticated = commands.handle_sign_in(SignInCommand {
        username: request.username,
        password: request.password,
    })?;

    Ok(HttpResponse::Ok().json(AuthenticatedUserResource {
        id: authenticated.user.id,
        username: authenticated.user.username,
        token: authenticated.token,
    }))
}
