//! Account lookups for display joins and admin tooling.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use seedhub_core::error::AppError;
use seedhub_core::traits::DocumentStore;
use seedhub_core::types::UserId;
use seedhub_database::UserStore;
use seedhub_entity::user::{CreateUser, User, UserView};

/// Resolves accounts into their redacted display form.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Returns the display view of a user: id, login, avatar, and role.
    pub async fn lookup_for_display(&self, id: UserId) -> Result<UserView, AppError> {
        self.users
            .find_by_id(&id)
            .await?
            .map(|user| user.to_view())
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Resolves display views for a set of users, each looked up once.
    pub async fn lookup_many(
        &self,
        ids: impl IntoIterator<Item = UserId>,
    ) -> Result<HashMap<UserId, UserView>, AppError> {
        let mut views = HashMap::new();
        for id in ids {
            if !views.contains_key(&id) {
                let view = self.lookup_for_display(id).await?;
                views.insert(id, view);
            }
        }
        Ok(views)
    }

    /// Finds a full account by login.
    pub async fn find_by_login(&self, login: &str) -> Result<User, AppError> {
        self.users
            .find_by_login(login)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{login}' not found")))
    }

    /// Seeds a new account.
    pub async fn create_user(&self, data: CreateUser) -> Result<User, AppError> {
        if data.login.trim().is_empty() {
            return Err(AppError::validation("Login cannot be empty"));
        }
        let user = self.users.create(&User::from(data)).await?;
        info!(user_id = %user.id, login = %user.login, "User created");
        Ok(user)
    }
}
