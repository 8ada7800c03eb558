//! In-process reservation store

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::models::{Reservation, ReservationStatus, ReservationType};

pub struct ReservationStore {
    reservations: DashMap<i64, Reservation>,
    next_id: AtomicI64,
}

pub struct NewReservation {
    pub vehicle_id: i64,
    pub user_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
    pub reservation_type: ReservationType,
    pub notes: Option<String>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self {
            reservations: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn insert(&self, new: NewReservation) -> Reservation {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let reservation = Reservation {
            id,
            status: ReservationStatus::Pending,
            vehicle_id: new.vehicle_id,
            user_id: new.user_id,
            start_date: new.start_date,
            end_date: new.end_date,
            total_price: new.total_price,
            reservation_type: new.reservation_type,
            notes: new.notes,
        };
        self.reservations.insert(id, reservation.clone());
        reservation
    }

    pub fn find_by_id(&self, id: i64) -> Option<Reservation> {
        self.reservations.get(&id).map(|entry| entry.value().clone())
    }

    pub fn all(&self) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> =
            self.reservations.iter().map(|entry| entry.value().clone()).collect();
        reservations.sort_by_key(|reservation| reservation.id);
        reservations
    }

    pub fn by_user(&self, user_id: i64) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        reservations.sort_by_key(|reservation| reservation.id);
        reservations
    }

    pub fn by_vehicle(&self, vehicle_id: i64) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|entry| entry.vehicle_id == vehicle_id)
            .map(|entry| entry.value().clone())
            .collect();
        reservations.sort_by_key(|reservation| reservation.id);
        reservations
    }

    pub fn update(&self, reservation: Reservation) {
        self.reservations.insert(reservation.id, reservation);
    }

    pub fn delete(&self, id: i64) -> bool {
        self.reservations.remove(&id).is_some()
    }
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}
