//! Reservation endpoints
//!
//! Every route requires an authenticated principal. Reads and writes on a
//! specific reservation are allowed to its owner or an administrator;
//! anyone else authenticated gets 403.

use actix_auth::{BearerCredential, Principal};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::models::{Reservation, ReservationStatus, ReservationType};
use crate::services::{
    CreateReservationCommand, ReservationCommandService, ReservationQueryService,
};

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub vehicle_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
    pub reservation_type: ReservationType,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ReservationStatus,
}

#[derive(Debug, Serialize)]
pub struct ReservationResource {
    pub id: i64,
    pub status: ReservationStatus,
    pub vehicle_id: i64,
    pub user_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
    pub reservation_type: ReservationType,
    pub notes: Option<String>,
}

impl ReservationResource {
    fn from_reservation(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            status: reservation.status,
            vehicle_id: reservation.vehicle_id,
            user_id: reservation.user_id,
            start_date: reservation.start_date.clone(),
            end_date: reservation.end_date.clone(),
            total_price: reservation.total_price,
            reservation_type: reservation.reservation_type,
            notes: reservation.notes.clone(),
        }
    }
}

fn caller_user_id(principal: &Principal) -> Result<i64> {
    principal
        .user_id()
        .ok_or_else(|| AppError::Validation("token carries no user id".into()))
}

/// Create a reservation for the caller
pub async fn create_reservation(
    principal: Principal,
    credential: Option<BearerCredential>,
    commands: web::Data<ReservationCommandService>,
    request: web::Json<CreateReservationRequest>,
) -> Result<HttpResponse> {
    let user_id = caller_user_id(&principal)?;
    let request = request.into_inner();

    let reservation = commands
        .handle_create(
            CreateReservationCommand {
                vehicle_id: request.vehicle_id,
                user_id,
                start_date: request.start_date,
                end_date: request.end_date,
                total_price: request.total_price,
                reservation_type: request.reservation_type,
                notes: request.notes,
            },
            credential.as_ref().map(|c| c.token()),
        )
        .await?;

    Ok(HttpResponse::Created().json(ReservationResource::from_reservation(&reservation)))
}

/// Every reservation in the system (administrators only)
pub async fn get_all_reservations(
    principal: Principal,
    queries: web::Data<ReservationQueryService>,
) -> Result<HttpResponse> {
    if !principal.is_admin() {
        warn!(username = %principal.username(), "reservation listing denied, administrator role required");
        return Err(AppError::Forbidden("Administrator role required".into()));
    }

    let reservations: Vec<ReservationResource> = queries
        .all_reservations()
        .iter()
        .map(ReservationResource::from_reservation)
        .collect();
    Ok(HttpResponse::Ok().json(reservations))
}

/// The caller's own reservations
pub async fn get_my_reservations(
    principal: Principal,
    queries: web::Data<ReservationQueryService>,
) -> Result<HttpResponse> {
    let user_id = caller_user_id(&principal)?;
    let reservations: Vec<ReservationResource> = queries
        .reservations_by_user(user_id)
        .iter()
        .map(ReservationResource::from_reservation)
        .collect();
    Ok(HttpResponse::Ok().json(reservations))
}

pub async fn get_reservation(
    principal: Principal,
    queries: web::Data<ReservationQueryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let reservation_id = path.into_inner();
    let reservation = queries.reservation_by_id(reservation_id).ok_or_else(|| {
        AppError::NotFound(format!("Reservation with id {} not found", reservation_id))
    })?;

    authorize_owner_or_admin(&principal, &reservation)?;
    Ok(HttpResponse::Ok().json(ReservationResource::from_reservation(&reservation)))
}

/// Reservations of one user; that user or an administrator only
pub async fn get_reservations_by_user(
    principal: Principal,
    queries: web::Data<ReservationQueryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    if !principal.is_admin() && principal.user_id() != Some(user_id) {
        warn!(
            username = %principal.username(),
            user_id,
            "reservation listing for foreign user denied"
        );
        return Err(AppError::Forbidden(
            "Reservations belong to another user".into(),
        ));
    }

    let reservations: Vec<ReservationResource> = queries
        .reservations_by_user(user_id)
        .iter()
        .map(ReservationResource::from_reservation)
        .collect();
    Ok(HttpResponse::Ok().json(reservations))
}

/// Reservations touching one vehicle (administrators only)
pub async fn get_reservations_by_vehicle(
    principal: Principal,
    queries: web::Data<ReservationQueryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    if !principal.is_admin() {
        warn!(username = %principal.username(), "vehicle reservation listing denied, administrator role required");
        return Err(AppError::Forbidden("Administrator role required".into()));
    }

    let reservations: Vec<ReservationResource> = queries
        .reservations_by_vehicle(path.into_inner())
        .iter()
        .map(ReservationResource::from_reservation)
        .collect();
    Ok(HttpResponse::Ok().json(reservations))
}

pub async fn update_reservation_status(
    principal: Principal,
    commands: web::Data<ReservationCommandService>,
    queries: web::Data<ReservationQueryService>,
    path: web::Path<i64>,
    request: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse> {
    let reservation_id = path.into_inner();
    let reservation = queries.reservation_by_id(reservation_id).ok_or_else(|| {
        AppError::NotFound(format!("Reservation with id {} not found", reservation_id))
    })?;

    authorize_owner_or_admin(&principal, &reservation)?;

    let updated = commands.handle_update_status(reservation_id, request.status)?;
    Ok(HttpResponse::Ok().json(ReservationResource::from_reservation(&updated)))
}

pub async fn delete_reservation(
    principal: Principal,
    commands: web::Data<ReservationCommandService>,
    queries: web::Data<ReservationQueryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let reservation_id = path.into_inner();
    let reservation = queries.reservation_by_id(reservation_id).ok_or_else(|| {
        AppError::NotFound(format!("Reservation with id {} not found", reservation_id))
    })?;

    authorize_owner_or_admin(&principal, &reservation)?;

    commands.handle_delete(reservation_id)?;
    Ok(HttpResponse::NoContent().finish())
}

fn authorize_owner_or_admin(principal: &Principal, reservation: &Reservation) -> Result<()> {
    if principal.is_admin() {
        return Ok(());
    }
    match principal.user_id() {
        Some(user_id) if reservation.belongs_to(user_id) => Ok(()),
        _ => {
            warn!(
                username = %principal.username(),
                reservation_id = reservation.id,
                "reservation access denied"
            );
            Err(AppError::Forbidden(
                "Reservation belongs to another user".into(),
            ))
        }
    }
}
