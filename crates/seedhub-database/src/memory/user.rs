//! In-memory user store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use seedhub_core::error::AppError;
use seedhub_core::result::AppResult;
use seedhub_core::traits::DocumentStore;
use seedhub_core::types::UserId;
use seedhub_entity::user::User;

use crate::store::UserStore;

/// User store holding accounts in a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<DashMap<UserId, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore<User, UserId> for MemoryUserStore {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        if self.users.iter().any(|entry| entry.login == user.login) {
            return Err(AppError::conflict(format!(
                "Login '{}' already exists",
                user.login
            )));
        }
        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn save(&self, user: &User) -> AppResult<User> {
        match self.users.get_mut(&user.id) {
            Some(mut entry) => {
                *entry = user.clone();
                Ok(user.clone())
            }
            None => Err(AppError::not_found(format!("User {} not found", user.id))),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.login == login)
            .map(|entry| entry.value().clone()))
    }
}
