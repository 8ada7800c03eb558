//! User query endpoints
//!
//! All of these require an authenticated principal; the listing additionally
//! requires the administrator role and answers 403, not 401, when an
//! authenticated caller lacks it.

use actix_auth::Principal;
use actix_web::{web, HttpResponse};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::handlers::authentication::UserResource;
use crate::services::UserQueryService;

/// List every account (administrators only)
pub async fn get_all_users(
    principal: Principal,
    queries: web::Data<UserQueryService>,
) -> Result<HttpResponse> {
    if !principal.is_admin() {
        warn!(username = %principal.username(), "user listing denied, administrator role required");
        return Err(AppError::Forbidden("Administrator role required".into()));
    }

    let users: Vec<UserResource> = queries
        .all_users()
        .iter()
        .map(UserResource::from_user)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

pub async fn get_user_by_id(
    _principal: Principal,
    path: web::Path<i64>,
    queries: web::Data<UserQueryService>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    let user = queries
        .user_by_id(user_id)
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user_id)))?;

    Ok(HttpResponse::Ok().json(UserResource::from_user(&user)))
}

pub async fn get_user_by_username(
    _principal: Principal,
    path: web::Path<String>,
    queries: web::Data<UserQueryService>,
) -> Result<HttpResponse> {
    let username = path.into_inner();
    let user = queries
        .user_by_username(&username)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))?;

    Ok(HttpResponse::Ok().json(UserResource::from_user(&user)))
}
