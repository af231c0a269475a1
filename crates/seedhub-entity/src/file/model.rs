//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seedhub_core::types::{CommentId, FileId, UserId};

use super::embedded::{Comment, Grade, Lock};
use super::lookup::position_by_key;
use super::rules::FileRuleError;

/// A shared file and its embedded comment thread, grades, and locks.
///
/// `path`, `hash_string`, `is_finished`, and `torrent_added_at` are internal
/// and must never reach a client; use the views in [`super::view`] for
/// anything that leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// Display name.
    pub name: String,
    /// Location of the content in storage.
    pub path: String,
    /// Size in bytes.
    pub size: i64,
    /// The uploading user.
    pub creator: UserId,
    /// Content hash, unique across all files.
    pub hash_string: String,
    /// Whether upload and processing completed.
    pub is_finished: bool,
    /// Free-form type label.
    pub file_type: String,
    /// Download counter.
    pub downloads: i64,
    /// Privacy tier.
    pub privacy: i32,
    /// Comment thread in posting order.
    #[sqlx(json)]
    pub comments: Vec<Comment>,
    /// At most one lock per user.
    #[sqlx(json)]
    pub locked: Vec<Lock>,
    /// At most one grade per user.
    #[sqlx(json)]
    pub grades: Vec<Grade>,
    /// When the upload began.
    pub created_at: DateTime<Utc>,
    /// When the content was handed to the distribution tracker.
    pub torrent_added_at: DateTime<Utc>,
}

impl File {
    // ── Comments ────────────────────────────────────────────

    /// Append a comment and return its id.
    pub fn add_comment(&mut self, author: UserId, text: impl Into<String>) -> CommentId {
        let id = CommentId::new();
        self.comments.push(Comment {
            id,
            text: text.into(),
            author,
            created_at: Utc::now(),
        });
        id
    }

    /// Replace the text of a comment in place.
    pub fn edit_comment(
        &mut self,
        comment_id: CommentId,
        text: impl Into<String>,
    ) -> Result<(), FileRuleError> {
        let index = position_by_key(&self.comments, &comment_id, |c| &c.id)
            .ok_or(FileRuleError::CommentNotFound)?;
        self.comments[index].text = text.into();
        Ok(())
    }

    /// Remove a comment, keeping the order of the others.
    pub fn delete_comment(&mut self, comment_id: CommentId) -> Result<Comment, FileRuleError> {
        let index = position_by_key(&self.comments, &comment_id, |c| &c.id)
            .ok_or(FileRuleError::CommentNotFound)?;
        Ok(self.comments.remove(index))
    }

    /// Number of comments.
    pub fn count_comments(&self) -> usize {
        self.comments.len()
    }

    // ── Grades ──────────────────────────────────────────────

    /// Record `user`'s grade.
    pub fn add_grade(&mut self, user: UserId, grade: f64) -> Result<(), FileRuleError> {
        if position_by_key(&self.grades, &user, |g| &g.user).is_some() {
            return Err(FileRuleError::AlreadyGraded);
        }
        self.grades.push(Grade { user, grade });
        Ok(())
    }

    /// Change `user`'s existing grade.
    pub fn edit_grade(&mut self, user: UserId, grade: f64) -> Result<(), FileRuleError> {
        let index = position_by_key(&self.grades, &user, |g| &g.user)
            .ok_or(FileRuleError::NotGradedYet)?;
        self.grades[index].grade = grade;
        Ok(())
    }

    /// Withdraw `user`'s grade.
    pub fn delete_grade(&mut self, user: UserId) -> Result<Grade, FileRuleError> {
        let index = position_by_key(&self.grades, &user, |g| &g.user)
            .ok_or(FileRuleError::GradeNotFound)?;
        Ok(self.grades.remove(index))
    }

    /// `user`'s grade, if any.
    pub fn grade_of(&self, user: UserId) -> Option<f64> {
        position_by_key(&self.grades, &user, |g| &g.user).map(|i| self.grades[i].grade)
    }

    /// Arithmetic mean of all grades, `0` when nobody graded.
    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.iter().map(|g| g.grade).sum();
        total / self.grades.len() as f64
    }

    // ── Locks ───────────────────────────────────────────────

    /// Take a lock for `user` now.
    pub fn add_lock(&mut self, user: UserId) -> Result<(), FileRuleError> {
        self.add_lock_at(user, Utc::now())
    }

    /// Take a lock for `user` with an explicit timestamp.
    pub fn add_lock_at(&mut self, user: UserId, at: DateTime<Utc>) -> Result<(), FileRuleError> {
        if self.is_locked_by(user) {
            return Err(FileRuleError::AlreadyLocked);
        }
        self.locked.push(Lock {
            user,
            created_at: at,
        });
        Ok(())
    }

    /// Release `user`'s lock.
    pub fn remove_lock(&mut self, user: UserId) -> Result<Lock, FileRuleError> {
        let index = position_by_key(&self.locked, &user, |l| &l.user)
            .ok_or(FileRuleError::NotLockedByUser)?;
        Ok(self.locked.remove(index))
    }

    /// Drop every lock. Returns how many were held.
    pub fn clear_locks(&mut self) -> usize {
        std::mem::take(&mut self.locked).len()
    }

    /// Whether anybody holds a lock.
    pub fn is_locked(&self) -> bool {
        !self.locked.is_empty()
    }

    /// Whether `user` holds a lock.
    pub fn is_locked_by(&self, user: UserId) -> bool {
        self.lock_of(user).is_some()
    }

    /// `user`'s lock, if any.
    pub fn lock_of(&self, user: UserId) -> Option<&Lock> {
        position_by_key(&self.locked, &user, |l| &l.user).map(|i| &self.locked[i])
    }

    /// Whether any lock was taken before `cutoff`.
    pub fn has_lock_before(&self, cutoff: DateTime<Utc>) -> bool {
        self.locked.iter().any(|l| l.created_at < cutoff)
    }

    // ── Counters ────────────────────────────────────────────

    /// Count one more download.
    pub fn increment_downloads(&mut self) {
        self.downloads += 1;
    }
}

/// Data recorded when an upload begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// Display name.
    pub name: String,
    /// Location of the content in storage.
    pub path: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: i64,
    /// The uploading user.
    pub creator: UserId,
    /// Content hash.
    pub hash_string: String,
    /// Free-form type label.
    #[serde(default)]
    pub file_type: String,
    /// Privacy tier.
    #[serde(default = "default_privacy")]
    pub privacy: i32,
}

fn default_privacy() -> i32 {
    1
}

impl From<CreateFile> for File {
    fn from(data: CreateFile) -> Self {
        let now = Utc::now();
        Self {
            id: FileId::new(),
            name: data.name,
            path: data.path,
            size: data.size,
            creator: data.creator,
            hash_string: data.hash_string,
            is_finished: false,
            file_type: data.file_type,
            downloads: 0,
            privacy: data.privacy,
            comments: Vec::new(),
            locked: Vec::new(),
            grades: Vec::new(),
            created_at: now,
            torrent_added_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn file() -> File {
        File::from(CreateFile {
            name: "notes.pdf".into(),
            path: "/data/ab/cd".into(),
            size: 1024,
            creator: UserId::new(),
            hash_string: "abcd".into(),
            file_type: "pdf".into(),
            privacy: 1,
        })
    }

    #[test]
    fn test_new_file_starts_unfinished_and_empty() {
        let f = file();
        assert!(!f.is_finished);
        assert_eq!(f.downloads, 0);
        assert!(f.comments.is_empty() && f.locked.is_empty() && f.grades.is_empty());
        assert_eq!(f.created_at, f.torrent_added_at);
    }

    #[test]
    fn test_second_lock_by_same_user_conflicts() {
        let mut f = file();
        let u = UserId::new();
        f.add_lock(u).unwrap();
        assert_eq!(f.add_lock(u), Err(FileRuleError::AlreadyLocked));
        assert_eq!(f.locked.iter().filter(|l| l.user == u).count(), 1);
    }

    #[test]
    fn test_locks_are_per_user() {
        let mut f = file();
        let (a, b) = (UserId::new(), UserId::new());
        f.add_lock(a).unwrap();
        f.add_lock(b).unwrap();
        assert!(f.is_locked());
        assert!(f.is_locked_by(a) && f.is_locked_by(b));
        assert!(!f.is_locked_by(UserId::new()));
    }

    #[test]
    fn test_remove_missing_lock_leaves_set_unchanged() {
        let mut f = file();
        let holder = UserId::new();
        f.add_lock(holder).unwrap();
        let before = f.locked.clone();
        assert_eq!(f.remove_lock(UserId::new()), Err(FileRuleError::NotLockedByUser));
        assert_eq!(f.locked, before);
    }

    #[test]
    fn test_remove_and_clear_locks() {
        let mut f = file();
        let (a, b) = (UserId::new(), UserId::new());
        f.add_lock(a).unwrap();
        f.add_lock(b).unwrap();
        assert_eq!(f.remove_lock(a).unwrap().user, a);
        assert!(!f.is_locked_by(a));
        assert_eq!(f.clear_locks(), 1);
        assert!(!f.is_locked());
    }

    #[test]
    fn test_has_lock_before() {
        let mut f = file();
        let now = Utc::now();
        f.add_lock_at(UserId::new(), now - Duration::days(40)).unwrap();
        f.add_lock_at(UserId::new(), now - Duration::days(5)).unwrap();
        assert!(f.has_lock_before(now - Duration::days(30)));
        assert!(!f.has_lock_before(now - Duration::days(41)));
    }

    #[test]
    fn test_duplicate_grade_keeps_first_value() {
        let mut f = file();
        let u = UserId::new();
        f.add_grade(u, 5.0).unwrap();
        assert_eq!(f.add_grade(u, 3.0), Err(FileRuleError::AlreadyGraded));
        assert_eq!(f.average_grade(), 5.0);
        assert_eq!(f.grade_of(u), Some(5.0));
    }

    #[test]
    fn test_average_grade() {
        let mut f = file();
        assert_eq!(f.average_grade(), 0.0);
        for g in [2.0, 4.0, 6.0] {
            f.add_grade(UserId::new(), g).unwrap();
        }
        assert_eq!(f.average_grade(), 4.0);
    }

    #[test]
    fn test_edit_and_delete_grade() {
        let mut f = file();
        let u = UserId::new();
        assert_eq!(f.edit_grade(u, 1.0), Err(FileRuleError::NotGradedYet));
        assert_eq!(f.delete_grade(u).unwrap_err(), FileRuleError::GradeNotFound);
        f.add_grade(u, 1.0).unwrap();
        f.edit_grade(u, 4.0).unwrap();
        assert_eq!(f.grade_of(u), Some(4.0));
        assert_eq!(f.delete_grade(u).unwrap().grade, 4.0);
        assert!(f.grades.is_empty());
    }

    #[test]
    fn test_comment_thread_keeps_order() {
        let mut f = file();
        let u = UserId::new();
        let first = f.add_comment(u, "first");
        let second = f.add_comment(u, "second");
        let third = f.add_comment(u, "third");
        f.edit_comment(second, "edited").unwrap();
        f.delete_comment(first).unwrap();
        let texts: Vec<_> = f.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["edited", "third"]);
        assert_eq!(f.comments[1].id, third);
        assert_eq!(f.count_comments(), 2);
    }

    #[test]
    fn test_unknown_comment_is_rejected() {
        let mut f = file();
        f.add_comment(UserId::new(), "hi");
        let before = f.comments.clone();
        assert_eq!(
            f.edit_comment(CommentId::new(), "new text"),
            Err(FileRuleError::CommentNotFound)
        );
        assert_eq!(
            f.delete_comment(CommentId::new()).unwrap_err(),
            FileRuleError::CommentNotFound
        );
        assert_eq!(f.comments, before);
    }
}
