//! Vehicle endpoints
//!
//! Browsing and the `/public/{id}` projection are open; mutation and
//! anything owner-scoped requires a principal. Owner checks answer 403 for
//! an authenticated stranger, which is distinct from the 401 an anonymous
//! caller gets from the entry point.

use actix_auth::Principal;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::vehicles::NewVehicle;
use crate::db::VehicleStore;
use crate::error::{AppError, Result};
use crate::models::Vehicle;

#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub name: String,
    pub year: i32,
    pub review: i32,
    pub price_rent: f64,
    pub price_sell: f64,
    pub is_available: bool,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVehicleRequest {
    pub name: String,
    pub price_rent: f64,
    pub price_sell: f64,
    pub is_available: bool,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct VehicleResource {
    pub id: i64,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub name: String,
    pub year: i32,
    pub review: i32,
    pub price_rent: f64,
    pub price_sell: f64,
    pub is_available: bool,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub owner_id: i64,
}

impl VehicleResource {
    fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vehicle_type: vehicle.vehicle_type.clone(),
            name: vehicle.name.clone(),
            year: vehicle.year,
            review: vehicle.review,
            price_rent: vehicle.price_rent,
            price_sell: vehicle.price_sell,
            is_available: vehicle.is_available,
            image_url: vehicle.image_url.clone(),
            lat: vehicle.lat,
            lng: vehicle.lng,
            description: vehicle.description.clone(),
            owner_id: vehicle.owner_id,
        }
    }
}

fn caller_user_id(principal: &Principal) -> Result<i64> {
    principal
        .user_id()
        .ok_or_else(|| AppError::Validation("token carries no user id".into()))
}

/// Create a vehicle owned by the caller
pub async fn create_vehicle(
    principal: Principal,
    store: web::Data<VehicleStore>,
    request: web::Json<CreateVehicleRequest>,
) -> Result<HttpResponse> {
    let owner_id = caller_user_id(&principal)?;
    let request = request.into_inner();

    if request.name.trim().is_empty() {
        return Err(AppError::Validation("vehicle name must not be empty".into()));
    }
    if request.price_rent < 0.0 || request.price_sell < 0.0 {
        return Err(AppError::Validation("prices must not be negative".into()));
    }

    let vehicle = store.insert(NewVehicle {
        vehicle_type: request.vehicle_type,
        name: request.name,
        year: request.year,
        review: request.review,
        price_rent: request.price_rent,
        price_sell: request.price_sell,
        is_available: request.is_available,
        image_url: request.image_url,
        lat: request.lat,
        lng: request.lng,
        description: request.description,
        owner_id,
    });

    info!(vehicle_id = vehicle.id, owner_id, "vehicle created");
    Ok(HttpResponse::Created().json(VehicleResource::from_vehicle(&vehicle)))
}

/// Public browse of every listed vehicle
pub async fn get_all_vehicles(store: web::Data<VehicleStore>) -> Result<HttpResponse> {
    let vehicles: Vec<VehicleResource> = store
        .all()
        .iter()
        .map(VehicleResource::from_vehicle)
        .collect();
    Ok(HttpResponse::Ok().json(vehicles))
}

/// Public browse filtered by vehicle type
pub async fn get_vehicles_by_type(
    store: web::Data<VehicleStore>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let vehicles: Vec<VehicleResource> = store
        .by_type(&path.into_inner())
        .iter()
        .map(VehicleResource::from_vehicle)
        .collect();
    Ok(HttpResponse::Ok().json(vehicles))
}

/// Unauthenticated-safe projection for sibling-service lookups
pub async fn get_vehicle_projection(
    store: web::Data<VehicleStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let vehicle_id = path.into_inner();
    let vehicle = store
        .find_by_id(vehicle_id)
        .ok_or_else(|| AppError::NotFound(format!("Vehicle with id {} not found", vehicle_id)))?;
    Ok(HttpResponse::Ok().json(VehicleResource::from_vehicle(&vehicle)))
}

/// Vehicles owned by the caller
pub async fn get_my_vehicles(
    principal: Principal,
    store: web::Data<VehicleStore>,
) -> Result<HttpResponse> {
    let owner_id = caller_user_id(&principal)?;
    let vehicles: Vec<VehicleResource> = store
        .by_owner(owner_id)
        .iter()
        .map(VehicleResource::from_vehicle)
        .collect();
    Ok(HttpResponse::Ok().json(vehicles))
}

/// A single vehicle; the owner or an administrator only
pub async fn get_vehicle(
    principal: Principal,
    store: web::Data<VehicleStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let vehicle_id = path.into_inner();
    let vehicle = store
        .find_by_id(vehicle_id)
        .ok_or_else(|| AppError::NotFound(format!("Vehicle with id {} not found", vehicle_id)))?;

    authorize_owner_or_admin(&principal, &vehicle)?;
    Ok(HttpResponse::Ok().json(VehicleResource::from_vehicle(&vehicle)))
}

pub async fn update_vehicle(
    principal: Principal,
    store: web::Data<VehicleStore>,
    path: web::Path<i64>,
    request: web::Json<UpdateVehicleRequest>,
) -> Result<HttpResponse> {
    let vehicle_id = path.into_inner();
    let mut vehicle = store
        .find_by_id(vehicle_id)
        .ok_or_else(|| AppError::NotFound(format!("Vehicle with id {} not found", vehicle_id)))?;

    authorize_owner_or_admin(&principal, &vehicle)?;

    let request = request.into_inner();
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("vehicle name must not be empty".into()));
    }

    vehicle.name = request.name;
    vehicle.price_rent = request.price_rent;
    vehicle.price_sell = request.price_sell;
    vehicle.is_available = request.is_available;
    vehicle.description = request.description;
    store.update(vehicle.clone());

    info!(vehicle_id, "vehicle updated");
    Ok(HttpResponse::Ok().json(VehicleResource::from_vehicle(&vehicle)))
}

pub async fn delete_vehicle(
    principal: Principal,
    store: web::Data<VehicleStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let vehicle_id = path.into_inner();
    let vehicle = store
        .find_by_id(vehicle_id)
        .ok_or_else(|| AppError::NotFound(format!("Vehicle with id {} not found", vehicle_id)))?;

    authorize_owner_or_admin(&principal, &vehicle)?;

    store.delete(vehicle_id);
    info!(vehicle_id, "vehicle deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// All vehicles of one owner (administrators only)
pub async fn get_vehicles_by_owner(
    principal: Principal,
    store: web::Data<VehicleStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    if !principal.is_admin() {
        warn!(username = %principal.username(), "owner listing denied, administrator role required");
        return Err(AppError::Forbidden("Administrator role required".into()));
    }

    let vehicles: Vec<VehicleResource> = store
        .by_owner(path.into_inner())
        .iter()
        .map(VehicleResource::from_vehicle)
        .collect();
    Ok(HttpResponse::Ok().json(vehicles))
}

fn authorize_owner_or_admin(principal: &Principal, vehicle: &Vehicle) -> Result<()> {
    if principal.is_admin() {
        return Ok(());
    }
    match principal.user_id() {
        Some(user_id) if vehicle.is_owned_by(user_id) => Ok(()),
        _ => {
            warn!(
                username = %principal.username(),
                vehicle_id = vehicle.id,
                owner_id = vehicle.owner_id,
                "vehicle access denied"
            );
            Err(AppError::Forbidden(
                "Vehicle belongs to another owner".into(),
            ))
        }
    }
}
