//! Reservation read side

use std::sync::Arc;

use crate::db::ReservationStore;
use crate::models::Reservation;

pub struct ReservationQueryService {
    store: Arc<ReservationStore>,
}

impl ReservationQueryService {
    pub fn new(store: Arc<ReservationStore>) -> Self {
        Self { store }
    }

    pub fn all_reservations(&self) -> Vec<Reservation> {
        self.store.all()
    }

    pub fn reservation_by_id(&self, id: i64) -> Option<Reservation> {
        self.store.find_by_id(id)
    }

    pub fn reservations_by_user(&self, user_id: i64) -> Vec<Reservation> {
        self.store.by_user(user_id)
    }

    pub fn reservations_by_vehicle(&self, vehicle_id: i64) -> Vec<Reservation> {
        self.store.by_vehicle(vehicle_id)
    }
}
