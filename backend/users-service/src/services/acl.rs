//! Outbound lookups against the plans service

use serde::Deserialize;
use service_client::EntityClient;

/// Projection of a subscription plan as the plans service exposes it.
#[derive(Debug, Deserialize)]
pub struct PlanProjection {
    pub id: i64,
    pub name: String,
}

/// Consults the plans service to check that a referenced plan exists,
/// forwarding the caller's bearer token when one is present. Absent and
/// unreachable are the same answer.
pub struct ExternalPlans {
    client: EntityClient,
}

impl ExternalPlans {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: EntityClient::new("plans-service", base_url),
        }
    }

    pub async fn fetch_plan_by_id(&self, id: i64, bearer: Option<&str>) -> Option<PlanProjection> {
        self.client
            .fetch(&format!("/api/v1/plans/id/{}", id), bearer)
            .await
    }
}
