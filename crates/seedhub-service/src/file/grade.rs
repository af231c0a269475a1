//! Grade mutations. Each user holds at most one grade per file.

use std::sync::Arc;

use tracing::info;

use seedhub_core::error::AppError;
use seedhub_core::types::FileId;
use seedhub_database::FileStore;

use super::load_file;
use crate::context::RequestContext;

/// Adds, changes, and withdraws the caller's grade on a file.
#[derive(Debug, Clone)]
pub struct GradeService {
    /// File store.
    files: Arc<dyn FileStore>,
}

impl GradeService {
    /// Creates a new grade service.
    pub fn new(files: Arc<dyn FileStore>) -> Self {
        Self { files }
    }

    /// Records the caller's grade. Returns the new average.
    pub async fn add_grade(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
        grade: f64,
    ) -> Result<f64, AppError> {
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        file.add_grade(ctx.user_id, grade)?;
        self.files.save(&file).await?;

        info!(file_id = %file_id, user_id = %ctx.user_id, grade, "Grade added");
        Ok(file.average_grade())
    }

    /// Changes the caller's existing grade. Returns the new average.
    pub async fn edit_grade(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
        grade: f64,
    ) -> Result<f64, AppError> {
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        file.edit_grade(ctx.user_id, grade)?;
        self.files.save(&file).await?;

        info!(file_id = %file_id, user_id = %ctx.user_id, grade, "Grade edited");
        Ok(file.average_grade())
    }

    /// Withdraws the caller's grade. Returns the new average.
    pub async fn delete_grade(&self, ctx: &RequestContext, file_id: FileId) -> Result<f64, AppError> {
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        file.delete_grade(ctx.user_id)?;
        self.files.save(&file).await?;

        info!(file_id = %file_id, user_id = %ctx.user_id, "Grade deleted");
        Ok(file.average_grade())
    }

    /// Mean grade of a file, `0` when nobody graded it.
    pub async fn average_grade(&self, file_id: FileId) -> Result<f64, AppError> {
        Ok(load_file(self.files.as_ref(), file_id).await?.average_grade())
    }
}
