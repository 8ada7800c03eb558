//! Profile read side

use std::sync::Arc;

use crate::db::ProfileStore;
use crate::models::Profile;

pub struct ProfileQueryService {
    store: Arc<ProfileStore>,
}

impl ProfileQueryService {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self { store }
    }

    pub fn all_profiles(&self) -> Vec<Profile> {
        self.store.all()
    }

    pub fn profile_by_id(&self, id: i64) -> Option<Profile> {
        self.store.find_by_id(id)
    }

    pub fn profile_by_user_id(&self, user_id: i64) -> Option<Profile> {
        self.store.find_by_user_id(user_id)
    }
}
