//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seedhub_core::types::UserId;
use seedhub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built from the verified access token and passed into service methods so
/// that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's access tier at the time the token was issued.
    pub role: UserRole,
    /// Login name (convenience field from the token).
    pub login: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, role: UserRole, login: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            login: login.into(),
            request_time: Utc::now(),
        }
    }
}
