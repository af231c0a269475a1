//! Client-facing user projection.

use serde::{Deserialize, Serialize};

use seedhub_core::types::UserId;

use super::role::UserRole;

/// What clients see of an account: no credential, no mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    /// User identifier.
    pub id: UserId,
    /// Login name.
    pub login: String,
    /// Avatar URL.
    pub avatar: String,
    /// Access tier.
    pub role: UserRole,
}
