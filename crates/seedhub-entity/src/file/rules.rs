//! Rule violations on a file's embedded collections.

use thiserror::Error;

use seedhub_core::error::AppError;

/// Why a mutation on a file's comments, grades, or locks was refused.
///
/// These are expected outcomes, not faults: the file is left untouched and
/// nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileRuleError {
    /// The user already holds a lock on this file.
    #[error("File is already locked by this user")]
    AlreadyLocked,
    /// The user already graded this file.
    #[error("File is already graded by this user")]
    AlreadyGraded,
    /// The user holds no lock on this file.
    #[error("File is not locked by this user")]
    NotLockedByUser,
    /// Editing a grade the user never gave.
    #[error("This user has not graded this file yet")]
    NotGradedYet,
    /// Deleting a grade the user never gave.
    #[error("Grade not found")]
    GradeNotFound,
    /// No comment with the given id on this file.
    #[error("Comment not found")]
    CommentNotFound,
}

impl FileRuleError {
    /// Uniqueness violations; everything else is a state mismatch.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyLocked | Self::AlreadyGraded)
    }
}

impl From<FileRuleError> for AppError {
    fn from(err: FileRuleError) -> Self {
        if err.is_conflict() {
            AppError::conflict(err.to_string())
        } else {
            AppError::state(err.to_string())
        }
    }
}
