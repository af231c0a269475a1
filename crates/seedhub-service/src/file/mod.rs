//! File services: queries, the upload lifecycle, and mutations on the
//! embedded comment, grade, and lock collections.

pub mod comment;
pub mod download;
pub mod grade;
pub mod lock;
pub mod service;

pub use comment::CommentService;
pub use download::DownloadService;
pub use grade::GradeService;
pub use lock::{LockService, PurgeReport};
pub use service::FileService;

use seedhub_core::error::AppError;
use seedhub_core::traits::DocumentStore;
use seedhub_core::types::FileId;
use seedhub_database::FileStore;
use seedhub_entity::file::File;

/// Load a file for mutation, regardless of its finished state.
pub(crate) async fn load_file(store: &dyn FileStore, id: FileId) -> Result<File, AppError> {
    store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
}
