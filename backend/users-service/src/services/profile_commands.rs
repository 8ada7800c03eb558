//! Profile creation

use std::sync::Arc;

use tracing::{info, warn};

use crate::db::profiles::NewProfile;
use crate::db::ProfileStore;
use crate::error::{AppError, Result};
use crate::models::Profile;
use crate::services::acl::ExternalPlans;

#[derive(Debug)]
pub struct CreateProfileCommand {
    pub user_id: i64,
    pub plan_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub ruc: String,
}

pub struct ProfileCommandService {
    store: Arc<ProfileStore>,
    plans: Arc<ExternalPlans>,
}

impl ProfileCommandService {
    pub fn new(store: Arc<ProfileStore>, plans: Arc<ExternalPlans>) -> Self {
        Self { store, plans }
    }

    /// Create a profile. When the command references a plan, its existence
    /// is confirmed against the plans service with the caller's own bearer
    /// token; an absent plan (which includes "plans service unreachable")
    /// rejects the command.
    pub async fn handle_create(
        &self,
        command: CreateProfileCommand,
        bearer: Option<&str>,
    ) -> Result<Profile> {
        if command.ruc.trim().is_empty() {
            return Err(AppError::Validation("ruc must not be empty".into()));
        }
        if self.store.exists_by_ruc(&command.ruc) {
            warn!(ruc = %command.ruc, "profile creation rejected, RUC already registered");
            return Err(AppError::Conflict(format!(
                "Profile with RUC {} already exists",
                command.ruc
            )));
        }

        if let Some(plan_id) = command.plan_id {
            if self.plans.fetch_plan_by_id(plan_id, bearer).await.is_none() {
                warn!(plan_id, "profile creation rejected, plan not found");
                return Err(AppError::Validation(format!(
                    "Plan with id {} does not exist",
                    plan_id
                )));
            }
        }

        let profile = self.store.insert(NewProfile {
            user_id: command.user_id,
            plan_id: command.plan_id,
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            phone_number: command.phone_number,
            ruc: command.ruc,
        });

        info!(profile_id = profile.id, user_id = profile.user_id, "profile created");
        Ok(profile)
    }
}
