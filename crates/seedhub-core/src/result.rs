//! Convenience result type alias for SeedHub.

use crate::error::AppError;

/// A specialized `Result` type for SeedHub operations.
pub type AppResult<T> = Result<T, AppError>;
