//! Profile endpoints
//!
//! Everything here requires an authenticated principal. The by-user
//! projection is what reservations-service consumes when it validates a
//! reservation's user reference.

use actix_auth::{BearerCredential, Principal};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::models::Profile;
use crate::services::{CreateProfileCommand, ProfileCommandService, ProfileQueryService};

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub ruc: String,
    #[serde(default)]
    pub plan_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResource {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub ruc: String,
}

impl ProfileResource {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            plan_id: profile.plan_id,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            phone_number: profile.phone_number.clone(),
            ruc: profile.ruc.clone(),
        }
    }
}

/// Create the caller's profile; the plan reference (if any) is validated
/// against the plans service with the caller's forwarded token.
pub async fn create_profile(
    principal: Principal,
    credential: Option<BearerCredential>,
    commands: web::Data<ProfileCommandService>,
    request: web::Json<CreateProfileRequest>,
) -> Result<HttpResponse> {
    let user_id = principal
        .user_id()
        .ok_or_else(|| AppError::Validation("token carries no user id".into()))?;

    let request = request.into_inner();
    let profile = commands
        .handle_create(
            CreateProfileCommand {
                user_id,
                plan_id: request.plan_id,
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                phone_number: request.phone_number,
                ruc: request.ruc,
            },
            credential.as_ref().map(|c| c.token()),
        )
        .await?;

    Ok(HttpResponse::Created().json(ProfileResource::from_profile(&profile)))
}

/// List every profile (administrators only)
pub async fn get_all_profiles(
    principal: Principal,
    queries: web::Data<ProfileQueryService>,
) -> Result<HttpResponse> {
    if !principal.is_admin() {
        warn!(username = %principal.username(), "profile listing denied, administrator role required");
        return Err(AppError::Forbidden("Administrator role required".into()));
    }

    let profiles: Vec<ProfileResource> = queries
        .all_profiles()
        .iter()
        .map(ProfileResource::from_profile)
        .collect();
    Ok(HttpResponse::Ok().json(profiles))
}

pub async fn get_profile(
    _principal: Principal,
    queries: web::Data<ProfileQueryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let profile_id = path.into_inner();
    let profile = queries
        .profile_by_id(profile_id)
        .ok_or_else(|| AppError::NotFound(format!("Profile with id {} not found", profile_id)))?;
    Ok(HttpResponse::Ok().json(ProfileResource::from_profile(&profile)))
}

/// Profile projection by IAM user id
pub async fn get_profile_by_user(
    _principal: Principal,
    queries: web::Data<ProfileQueryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    let profile = queries.profile_by_user_id(user_id).ok_or_else(|| {
        AppError::NotFound(format!("Profile for user id {} not found", user_id))
    })?;
    Ok(HttpResponse::Ok().json(ProfileResource::from_profile(&profile)))
}
