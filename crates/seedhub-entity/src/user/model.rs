//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seedhub_core::types::UserId;

use super::role::UserRole;
use super::view::UserView;

/// A registered account.
///
/// Accounts are created by registration, which lives outside this system;
/// file operations only ever read them for display joins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login name.
    pub login: String,
    /// Opaque credential. Never serialized.
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Mail address. Never part of a display view.
    pub mail: String,
    /// Avatar URL.
    pub avatar: String,
    /// Access tier.
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Redacted projection suitable for clients.
    pub fn to_view(&self) -> UserView {
        UserView {
            id: self.id,
            login: self.login.clone(),
            avatar: self.avatar.clone(),
            role: self.role,
        }
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login name.
    pub login: String,
    /// Opaque credential, already hashed by the caller.
    pub password: String,
    /// Mail address.
    pub mail: String,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: String,
    /// Access tier.
    #[serde(default)]
    pub role: UserRole,
}

impl From<CreateUser> for User {
    fn from(data: CreateUser) -> Self {
        Self {
            id: UserId::new(),
            login: data.login,
            password: data.password,
            mail: data.mail,
            avatar: data.avatar,
            role: data.role,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::from(CreateUser {
            login: "alice".into(),
            password: "$argon2id$opaque".into(),
            mail: "alice@example.org".into(),
            avatar: "/img/alice.png".into(),
            role: UserRole::default(),
        })
    }

    #[test]
    fn test_serialized_user_never_carries_password() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_view_drops_password_and_mail() {
        let view = serde_json::to_value(sample().to_view()).expect("serialize");
        assert!(view.get("password").is_none());
        assert!(view.get("mail").is_none());
        assert_eq!(view["login"], "alice");
        assert_eq!(view["role"], 1);
    }
}
