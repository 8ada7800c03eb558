//! Outbound lookups against the vehicles and users services
//!
//! Each wrapper owns its own typed projection of the sibling's resource;
//! the sibling's internal model never crosses the boundary.

use serde::Deserialize;
use service_client::EntityClient;

/// Projection of a vehicle as vehicles-service exposes it publicly.
#[derive(Debug, Deserialize)]
pub struct VehicleProjection {
    pub id: i64,
    pub name: String,
    pub is_available: bool,
    pub owner_id: i64,
}

/// Projection of a user profile as users-service exposes it.
#[derive(Debug, Deserialize)]
pub struct ProfileProjection {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
}

pub struct ExternalVehicles {
    client: EntityClient,
}

impl ExternalVehicles {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: EntityClient::new("vehicles-service", base_url),
        }
    }

    pub async fn fetch_vehicle_by_id(
        &self,
        id: i64,
        bearer: Option<&str>,
    ) -> Option<VehicleProjection> {
        self.client
            .fetch(&format!("/api/v1/vehicles/public/{}", id), bearer)
            .await
    }
}

pub struct ExternalProfiles {
    client: EntityClient,
}

impl ExternalProfiles {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: EntityClient::new("users-service", base_url),
        }
    }

    pub async fn fetch_profile_by_user_id(
        &self,
        user_id: i64,
        bearer: Option<&str>,
    ) -> Option<ProfileProjection> {
        self.client
            .fetch(&format!("/api/v1/profiles/user/{}", user_id), bearer)
            .await
    }
}
