//! Vehicle aggregate

/// A listed vehicle. `owner_id` references a user in the IAM service; the
/// reference is by id only, the services share no tables.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: i64,
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

impl Vehicle {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}
