//! File queries and the upload lifecycle.
//!
//! Queries only ever see finished files; an unfinished file is reported as
//! not found.

use std::sync::Arc;

use tracing::info;

use seedhub_core::error::AppError;
use seedhub_core::traits::DocumentStore;
use seedhub_core::types::{FileId, FileQuery, FilterField, SortDirection, SortField, UserId};
use seedhub_database::FileStore;
use seedhub_entity::file::{CommentView, CreateFile, File, FileDetailView, FileListView};

use crate::format;
use crate::user::UserService;

/// Read-side file operations plus upload registration.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File store.
    files: Arc<dyn FileStore>,
    /// Display joins for creators and comment authors.
    users: UserService,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(files: Arc<dyn FileStore>, users: UserService) -> Self {
        Self { files, users }
    }

    /// Full view of a finished file.
    pub async fn get_by_id(&self, id: FileId) -> Result<FileDetailView, AppError> {
        let file = self.load_finished(id).await?;
        let creator = self.users.lookup_for_display(file.creator).await?;
        let comments = self.format_comments(&file).await?;
        Ok(format::file_detail_view(&file, creator, comments))
    }

    /// Finished files matching `filters`, ordered by `sort`, annotated for
    /// `viewer`. A `limit` of zero or less means unlimited.
    pub async fn list(
        &self,
        filters: Vec<FilterField>,
        sort: Vec<SortField>,
        limit: i64,
        viewer: UserId,
    ) -> Result<Vec<FileListView>, AppError> {
        for filter in &filters {
            filter.validate()?;
        }
        let query = FileQuery::new()
            .with_filters(filters)
            .with_sort(sort)
            .with_limit(limit)
            .finished(true);
        let files = self.files.find(&query).await?;
        Ok(format::file_list(&files, viewer))
    }

    /// Comment thread of a finished file with authors resolved.
    pub async fn get_comments(&self, id: FileId) -> Result<Vec<CommentView>, AppError> {
        let file = self.load_finished(id).await?;
        self.format_comments(&file).await
    }

    /// Finished files `user` holds a lock on, ordered by when that lock was
    /// taken.
    pub async fn list_locked_by_user(
        &self,
        user: UserId,
        order: SortDirection,
        limit: i64,
    ) -> Result<Vec<FileListView>, AppError> {
        let query = FileQuery::new()
            .finished(true)
            .locked_by(user, order)
            .with_limit(limit);
        let files = self.files.find(&query).await?;
        Ok(format::file_list(&files, user))
    }

    /// Number of comments on a finished file.
    pub async fn count_comments(&self, id: FileId) -> Result<usize, AppError> {
        Ok(self.load_finished(id).await?.count_comments())
    }

    /// Records the start of an upload. The file stays invisible until
    /// [`mark_finished`](Self::mark_finished).
    pub async fn register_upload(&self, data: CreateFile) -> Result<File, AppError> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }
        let file = self.files.create(&File::from(data)).await?;
        info!(file_id = %file.id, user_id = %file.creator, name = %file.name, "Upload registered");
        Ok(file)
    }

    /// Flags a file as finished, making it visible to queries.
    pub async fn mark_finished(&self, id: FileId) -> Result<(), AppError> {
        let mut file = super::load_file(self.files.as_ref(), id).await?;
        if file.is_finished {
            return Ok(());
        }
        file.is_finished = true;
        self.files.save(&file).await?;
        info!(file_id = %id, "File marked finished");
        Ok(())
    }

    async fn load_finished(&self, id: FileId) -> Result<File, AppError> {
        self.files
            .find_by_id(&id)
            .await?
            .filter(|file| file.is_finished)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    async fn format_comments(&self, file: &File) -> Result<Vec<CommentView>, AppError> {
        let authors = self
            .users
            .lookup_many(file.comments.iter().map(|c| c.author).collect::<Vec<_>>())
            .await?;
        format::comment_list(&file.comments, &authors).map_err(|missing| {
            AppError::not_found(format!("Comment author {missing} not found"))
        })
    }
}
