//! Comment thread mutations.

use std::sync::Arc;

use tracing::info;

use seedhub_core::error::AppError;
use seedhub_core::types::{CommentId, FileId};
use seedhub_database::FileStore;
use seedhub_entity::file::CommentView;

use super::load_file;
use crate::context::RequestContext;
use crate::format;
use crate::user::UserService;

/// Adds, edits, and deletes comments on a file.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// File store.
    files: Arc<dyn FileStore>,
    /// Author resolution for the returned view.
    users: UserService,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(files: Arc<dyn FileStore>, users: UserService) -> Self {
        Self { files, users }
    }

    /// Appends a comment by the caller and returns it with its author
    /// resolved.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
        text: &str,
    ) -> Result<CommentView, AppError> {
        let author = self.users.lookup_for_display(ctx.user_id).await?;
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        let comment_id = file.add_comment(ctx.user_id, text);
        self.files.save(&file).await?;

        info!(file_id = %file_id, user_id = %ctx.user_id, comment_id = %comment_id, "Comment added");

        let comment = file
            .comments
            .iter()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| AppError::internal("Comment missing after append"))?;
        Ok(format::comment_view(comment, author))
    }

    /// Replaces the text of a comment.
    pub async fn edit_comment(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
        comment_id: CommentId,
        text: &str,
    ) -> Result<(), AppError> {
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        file.edit_comment(comment_id, text)?;
        self.files.save(&file).await?;

        info!(file_id = %file_id, user_id = %ctx.user_id, comment_id = %comment_id, "Comment edited");
        Ok(())
    }

    /// Removes a comment from the thread.
    pub async fn delete_comment(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
        comment_id: CommentId,
    ) -> Result<(), AppError> {
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        file.delete_comment(comment_id)?;
        self.files.save(&file).await?;

        info!(file_id = %file_id, user_id = %ctx.user_id, comment_id = %comment_id, "Comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::context::RequestContext;
    use crate::testing::Fixture;
    use seedhub_core::error::ErrorKind;
    use seedhub_core::types::{CommentId, UserId};
    use seedhub_entity::user::UserRole;

    #[tokio::test]
    async fn test_added_comment_is_listed_with_author() {
        let fx = Fixture::new();
        let ctx = fx.ctx("ana").await;
        let file = fx.finished_file(ctx.user_id, "song.ogg").await;

        let added = fx.comments.add_comment(&ctx, file.id, "hi").await.unwrap();
        assert_eq!(added.author.login, "ana");

        let comments = fx.files.get_comments(file.id).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "hi");
        assert_eq!(comments[0].author.id, ctx.user_id);
        assert_eq!(comments[0].author.login, "ana");
        assert_eq!(fx.files.count_comments(file.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_edit_unknown_comment_does_not_persist() {
        let fx = Fixture::new();
        let ctx = fx.ctx("ana").await;
        let file = fx.finished_file(ctx.user_id, "song.ogg").await;
        fx.comments.add_comment(&ctx, file.id, "original").await.unwrap();
        let before = fx.reload(&file).await;

        let err = fx
            .comments
            .edit_comment(&ctx, file.id, CommentId::new(), "changed")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::State);

        let after = fx.reload(&file).await;
        assert_eq!(after.comments, before.comments);
    }

    #[tokio::test]
    async fn test_edit_and_delete_comment() {
        let fx = Fixture::new();
        let ctx = fx.ctx("ana").await;
        let file = fx.finished_file(ctx.user_id, "song.ogg").await;
        let first = fx.comments.add_comment(&ctx, file.id, "one").await.unwrap();
        fx.comments.add_comment(&ctx, file.id, "two").await.unwrap();

        fx.comments
            .edit_comment(&ctx, file.id, first.id, "uno")
            .await
            .unwrap();
        let texts: Vec<_> = fx.reload(&file).await.comments.into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["uno", "two"]);

        fx.comments.delete_comment(&ctx, file.id, first.id).await.unwrap();
        let remaining = fx.reload(&file).await.comments;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "two");

        let err = fx
            .comments
            .delete_comment(&ctx, file.id, first.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::State);
    }

    #[tokio::test]
    async fn test_comment_on_missing_file_is_not_found() {
        let fx = Fixture::new();
        let ctx = fx.ctx("ana").await;
        let err = fx
            .comments
            .add_comment(&ctx, seedhub_core::types::FileId::new(), "x")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_unknown_author_is_rejected_without_saving() {
        let fx = Fixture::new();
        let owner = fx.ctx("ana").await;
        let file = fx.finished_file(owner.user_id, "song.ogg").await;
        let ghost = RequestContext::new(UserId::new(), UserRole::MEMBER, "ghost");

        let err = fx
            .comments
            .add_comment(&ghost, file.id, "boo")
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        assert!(fx.reload(&file).await.comments.is_empty());
        assert!(fx.files.get_by_id(file.id).await.is_ok());
        assert!(fx.files.get_comments(file.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_comment_on_unfinished_file_is_accepted() {
        let fx = Fixture::new();
        let ctx = fx.ctx("ana").await;
        let file = fx.unfinished_file(ctx.user_id, "partial.ogg").await;

        fx.comments.add_comment(&ctx, file.id, "early").await.unwrap();

        assert_eq!(fx.reload(&file).await.comments.len(), 1);
        assert!(fx.files.get_comments(file.id).await.unwrap_err().is_not_found());
    }
}
