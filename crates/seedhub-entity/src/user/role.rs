//! Access tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric access tier of an account. Higher values carry more privilege;
/// `1` is the ordinary member tier every account starts with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct UserRole(pub i32);

impl UserRole {
    /// The default member tier.
    pub const MEMBER: Self = Self(1);

    /// Check if this tier is at least `other`.
    pub fn has_at_least(&self, other: UserRole) -> bool {
        *self >= other
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::MEMBER
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
