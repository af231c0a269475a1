//! Store traits for the SeedHub aggregates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use seedhub_core::result::AppResult;
use seedhub_core::traits::DocumentStore;
use seedhub_core::types::{FileId, FileQuery, UserId};
use seedhub_entity::file::File;
use seedhub_entity::user::User;

/// Persistence for file documents.
///
/// A file's comments, grades, and locks travel with the document: `save`
/// writes all of them back at once.
#[async_trait]
pub trait FileStore: DocumentStore<File, FileId> + std::fmt::Debug {
    /// Files matching `query`, ordered and capped as it specifies.
    async fn find(&self, query: &FileQuery) -> AppResult<Vec<File>>;

    /// Files holding at least one lock taken before `cutoff`, regardless of
    /// their finished state.
    async fn find_with_lock_before(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<File>>;
}

/// Persistence for user documents.
#[async_trait]
pub trait UserStore: DocumentStore<User, UserId> + std::fmt::Debug {
    /// Find an account by login name.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;
}
