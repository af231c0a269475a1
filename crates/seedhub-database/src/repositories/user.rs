//! PostgreSQL user store.

use async_trait::async_trait;
use sqlx::PgPool;

use seedhub_core::error::{AppError, ErrorKind};
use seedhub_core::result::AppResult;
use seedhub_core::traits::DocumentStore;
use seedhub_core::types::UserId;
use seedhub_entity::user::User;

use crate::store::UserStore;

/// User store backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore<User, UserId> for PgUserStore {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, login, password, mail, avatar, role, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(user.id)
        .bind(&user.login)
        .bind(&user.password)
        .bind(&user.mail)
        .bind(&user.avatar)
        .bind(user.role)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_login_key") => {
                AppError::conflict(format!("Login '{}' already exists", user.login))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn save(&self, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET login = $2, password = $3, mail = $4, avatar = $5, role = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(user.id)
        .bind(&user.login)
        .bind(&user.password)
        .bind(&user.mail)
        .bind(&user.avatar)
        .bind(user.role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save user", e))?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", user.id)))
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by login", e)
            })
    }
}
