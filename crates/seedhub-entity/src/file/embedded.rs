//! Records embedded in a file document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seedhub_core::types::{CommentId, UserId};

/// One entry of a file's comment thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier, unique within the file.
    pub id: CommentId,
    /// Comment body.
    #[serde(default)]
    pub text: String,
    /// Author of the comment.
    pub author: UserId,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

/// A user's reservation marker on a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lock {
    /// Holder of the lock.
    pub user: UserId,
    /// When the lock was taken.
    pub created_at: DateTime<Utc>,
}

/// A user's grade of a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// The grading user.
    pub user: UserId,
    /// The grade value.
    pub grade: f64,
}
