//! User read side

use std::sync::Arc;

use crate::db::UserStore;
use crate::models::User;

pub struct UserQueryService {
    store: Arc<UserStore>,
}

impl UserQueryService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub fn all_users(&self) -> Vec<User> {
        self.store.all()
    }

    pub fn user_by_id(&self, id: i64) -> Option<User> {
        self.store.find_by_id(id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.store.find_by_username(username)
    }
}
