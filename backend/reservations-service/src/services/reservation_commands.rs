//! Reservation command handling

use std::sync::Arc;

use tracing::{info, warn};

use crate::db::reservations::NewReservation;
use crate::db::ReservationStore;
use crate::error::{AppError, Result};
use crate::models::{Reservation, ReservationStatus, ReservationType};
use crate::services::acl::{ExternalProfiles, ExternalVehicles};

#[derive(Debug)]
pub struct CreateReservationCommand {
    pub vehicle_id: i64,
    pub user_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
    pub reservation_type: ReservationType,
    pub notes: Option<String>,
}

pub struct ReservationCommandService {
    store: Arc<ReservationStore>,
    profiles: Arc<ExternalProfiles>,
    vehicles: Arc<ExternalVehicles>,
}

impl ReservationCommandService {
    pub fn new(
        store: Arc<ReservationStore>,
        profiles: Arc<ExternalProfiles>,
        vehicles: Arc<ExternalVehicles>,
    ) -> Self {
        Self {
            store,
            profiles,
            vehicles,
        }
    }

    /// Create a reservation after confirming both references on the
    /// caller's behalf. An absent answer - whether the entity is missing or
    /// its service is unreachable - rejects the command with a validation
    /// error naming the id.
    pub async fn handle_create(
        &self,
        command: CreateReservationCommand,
        bearer: Option<&str>,
    ) -> Result<Reservation> {
        if command.total_price < 0.0 {
            return Err(AppError::Validation("total price must not be negative".into()));
        }

        info!(
            user_id = command.user_id,
            vehicle_id = command.vehicle_id,
            "creating reservation"
        );

        if self
            .profiles
            .fetch_profile_by_user_id(command.user_id, bearer)
            .await
            .is_none()
        {
            warn!(user_id = command.user_id, "reservation rejected, user profile not found");
            return Err(AppError::Validation(format!(
                "User with id {} does not exist",
                command.user_id
            )));
        }

        if self
            .vehicles
            .fetch_vehicle_by_id(command.vehicle_id, bearer)
            .await
            .is_none()
        {
            warn!(vehicle_id = command.vehicle_id, "reservation rejected, vehicle not found");
            return Err(AppError::Validation(format!(
                "Vehicle with id {} does not exist",
                command.vehicle_id
            )));
        }

        let reservation = self.store.insert(NewReservation {
            vehicle_id: command.vehicle_id,
            user_id: command.user_id,
            start_date: command.start_date,
            end_date: command.end_date,
            total_price: command.total_price,
            reservation_type: command.reservation_type,
            notes: command.notes,
        });

        info!(reservation_id = reservation.id, "reservation created");
        Ok(reservation)
    }

    pub fn handle_update_status(
        &self,
        reservation_id: i64,
        status: ReservationStatus,
    ) -> Result<Reservation> {
        let mut reservation = self.store.find_by_id(reservation_id).ok_or_else(|| {
            AppError::NotFound(format!("Reservation with id {} not found", reservation_id))
        })?;

        reservation.status = status;
        self.store.update(reservation.clone());

        info!(reservation_id, status = ?status, "reservation status updated");
        Ok(reservation)
    }

    pub fn handle_delete(&self, reservation_id: i64) -> Result<()> {
        if !self.store.delete(reservation_id) {
            return Err(AppError::NotFound(format!(
                "Reservation with id {} not found",
                reservation_id
            )));
        }
        info!(reservation_id, "reservation deleted");
        Ok(())
    }
}
