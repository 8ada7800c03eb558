//! In-process profile store

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::models::Profile;

pub struct ProfileStore {
    profiles: DashMap<i64, Profile>,
    next_id: AtomicI64,
}

pub struct NewProfile {
    pub user_id: i64,
    pub plan_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub ruc: String,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn insert(&self, new: NewProfile) -> Profile {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let profile = Profile {
            id,
            user_id: new.user_id,
            plan_id: new.plan_id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone_number: new.phone_number,
            ruc: new.ruc,
        };
        self.profiles.insert(id, profile.clone());
        profile
    }

    pub fn find_by_id(&self, id: i64) -> Option<Profile> {
        self.profiles.get(&id).map(|entry| entry.value().clone())
    }

    pub fn find_by_user_id(&self, user_id: i64) -> Option<Profile> {
        self.profiles
            .iter()
            .find(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
    }

    pub fn exists_by_ruc(&self, ruc: &str) -> bool {
        self.profiles.iter().any(|entry| entry.ruc == ruc)
    }

    pub fn all(&self) -> Vec<Profile> {
        let mut profiles: Vec<Profile> =
            self.profiles.iter().map(|entry| entry.value().clone()).collect();
        profiles.sort_by_key(|profile| profile.id);
        profiles
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}
