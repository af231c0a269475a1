//! # seedhub-service
//!
//! Business logic service layer for SeedHub. Services are stateless and
//! share their stores through `Arc<dyn FileStore>` / `Arc<dyn UserStore>`
//! handed in at construction.
//!
//! Every mutation follows the same shape: load the file, apply the rule on
//! the [`File`](seedhub_entity::file::File) entity, and save the whole
//! document only if the rule succeeded.

pub mod context;
pub mod file;
pub mod format;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RequestContext;
pub use file::{
    CommentService, DownloadService, FileService, GradeService, LockService, PurgeReport,
};
pub use user::UserService;
