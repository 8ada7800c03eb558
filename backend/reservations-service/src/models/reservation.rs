//! Reservation aggregate

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationType {
    Rent,
    Sell,
}

/// A reservation of one vehicle by one user profile. Both references are
/// ids into sibling services; they were confirmed to exist when the
/// reservation was created and are never joined locally.
#[derive(Debug, Clone)]
pub struct Reservation {
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

impl Reservation {
    pub fn belongs_to(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
