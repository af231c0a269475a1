//! Client-facing file projections.
//!
//! None of these carry the storage path, content hash, finished flag, or
//! tracker timestamp. JSON field names are camelCase to match the web
//! client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seedhub_core::types::{CommentId, FileId, UserId};

use crate::user::UserView;

/// A comment with its author resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    /// Comment identifier.
    pub id: CommentId,
    /// Comment body.
    pub text: String,
    /// The author's display view.
    pub author: UserView,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

/// A lock entry as shown on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockView {
    /// Holder of the lock.
    pub user: UserId,
    /// When the lock was taken.
    pub created_at: DateTime<Utc>,
}

/// A grade entry as shown on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeView {
    /// The grading user.
    pub user: UserId,
    /// The grade value.
    pub grade: f64,
}

/// Full view of a single finished file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDetailView {
    /// File identifier.
    pub id: FileId,
    /// Display name.
    pub name: String,
    /// Size in bytes.
    pub size: i64,
    /// Free-form type label.
    pub file_type: String,
    /// Download counter.
    pub downloads: i64,
    /// Privacy tier.
    pub privacy: i32,
    /// The uploader's display view.
    pub creator: UserView,
    /// Comment thread with authors resolved.
    pub comments: Vec<CommentView>,
    /// Current locks.
    pub locked: Vec<LockView>,
    /// Current grades.
    pub grades: Vec<GradeView>,
    /// Mean of `grades`, `0` when empty.
    pub average_grade: f64,
    /// When the upload began.
    pub created_at: DateTime<Utc>,
}

/// One row of a file listing, annotated for the requesting user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListView {
    /// File identifier.
    pub id: FileId,
    /// Display name.
    pub name: String,
    /// Size in bytes.
    pub size: i64,
    /// Free-form type label.
    pub file_type: String,
    /// Download counter.
    pub downloads: i64,
    /// When the upload began.
    pub created_at: DateTime<Utc>,
    /// Number of comments.
    pub comment_count: usize,
    /// Mean grade, `0` when ungraded.
    pub average_grade: f64,
    /// Whether anybody holds a lock.
    pub is_locked: bool,
    /// Whether the requesting user holds a lock.
    pub locked_by_viewer: bool,
    /// The requesting user's grade, if any.
    pub viewer_grade: Option<f64>,
}
