//! In-process vehicle store

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::models::Vehicle;

pub struct VehicleStore {
    vehicles: DashMap<i64, Vehicle>,
    next_id: AtomicI64,
}

pub struct NewVehicle {
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

impl VehicleStore {
    pub fn new() -> Self {
        Self {
            vehicles: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn insert(&self, new: NewVehicle) -> Vehicle {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let vehicle = Vehicle {
            id,
            vehicle_type: new.vehicle_type,
            name: new.name,
            year: new.year,
            review: new.review,
            price_rent: new.price_rent,
            price_sell: new.price_sell,
            is_available: new.is_available,
            image_url: new.image_url,
            lat: new.lat,
            lng: new.lng,
            description: new.description,
            owner_id: new.owner_id,
        };
        self.vehicles.insert(id, vehicle.clone());
        vehicle
    }

    pub fn find_by_id(&self, id: i64) -> Option<Vehicle> {
        self.vehicles.get(&id).map(|entry| entry.value().clone())
    }

    pub fn all(&self) -> Vec<Vehicle> {
        let mut vehicles: Vec<Vehicle> =
            self.vehicles.iter().map(|entry| entry.value().clone()).collect();
        vehicles.sort_by_key(|vehicle| vehicle.id);
        vehicles
    }

    pub fn by_type(&self, vehicle_type: &str) -> Vec<Vehicle> {
        let mut vehicles: Vec<Vehicle> = self
            .vehicles
            .iter()
            .filter(|entry| entry.vehicle_type == vehicle_type)
            .map(|entry| entry.value().clone())
            .collect();
        vehicles.sort_by_key(|vehicle| vehicle.id);
        vehicles
    }

    pub fn by_owner(&self, owner_id: i64) -> Vec<Vehicle> {
        let mut vehicles: Vec<Vehicle> = self
            .vehicles
            .iter()
            .filter(|entry| entry.owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        vehicles.sort_by_key(|vehicle| vehicle.id);
        vehicles
    }

    pub fn update(&self, vehicle: Vehicle) {
        self.vehicles.insert(vehicle.id, vehicle);
    }

    pub fn delete(&self, id: i64) -> bool {
        self.vehicles.remove(&id).is_some()
    }
}

impl Default for VehicleStore {
    fn default() -> Self {
        Self::new()
    }
}
