//! In-process user store
//!
//! Durable persistence sits outside this service's boundary; the store is a
//! concurrent map with a sequential id source, shaped so a database-backed
//! repository could replace it without touching the command services.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use dashmap::DashMap;

use crate::models::{Role, User};

pub struct UserStore {
    users: DashMap<i64, User>,
    next_id: AtomicI64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn insert(
        &self,
        username: String,
        password_hash: String,
        email: String,
        roles: Vec<Role>,
    ) -> User {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            username,
            password_hash,
            email,
            roles,
            is_active: true,
            created_at: Utc::now(),
            last_login: None,
        };
        self.users.insert(id, user.clone());
        user
    }

    pub fn exists_by_username(&self, username: &str) -> bool {
        self.users.iter().any(|entry| entry.username == username)
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.value().clone())
    }

    pub fn find_by_id(&self, id: i64) -> Option<User> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    pub fn all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.iter().map(|entry| entry.value().clone()).collect();
        users.sort_by_key(|user| user.id);
        users
    }

    pub fn update(&self, user: User) {
        self.users.insert(user.id, user);
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
