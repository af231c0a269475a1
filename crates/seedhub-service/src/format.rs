//! Shaping of stored records into client-facing views.
//!
//! Everything here is pure. Internal file attributes are dropped simply by
//! not being copied into the view types.

use std::collections::HashMap;

use seedhub_core::types::UserId;
use seedhub_entity::file::{
    Comment, CommentView, File, FileDetailView, FileListView, Grade, GradeView, Lock, LockView,
};
use seedhub_entity::user::UserView;

/// Annotate a file for a listing as seen by `viewer`.
pub fn file_list_view(file: &File, viewer: UserId) -> FileListView {
    FileListView {
        id: file.id,
        name: file.name.clone(),
        size: file.size,
        file_type: file.file_type.clone(),
        downloads: file.downloads,
        created_at: file.created_at,
        comment_count: file.count_comments(),
        average_grade: file.average_grade(),
        is_locked: file.is_locked(),
        locked_by_viewer: file.is_locked_by(viewer),
        viewer_grade: file.grade_of(viewer),
    }
}

/// Format a list of files for `viewer`, keeping order.
pub fn file_list(files: &[File], viewer: UserId) -> Vec<FileListView> {
    files.iter().map(|f| file_list_view(f, viewer)).collect()
}

/// Attach the resolved author to a comment.
pub fn comment_view(comment: &Comment, author: UserView) -> CommentView {
    CommentView {
        id: comment.id,
        text: comment.text.clone(),
        author,
        created_at: comment.created_at,
    }
}

/// Format a comment thread using an author lookup table.
///
/// Returns the id of the first author missing from `authors`.
pub fn comment_list(
    comments: &[Comment],
    authors: &HashMap<UserId, UserView>,
) -> Result<Vec<CommentView>, UserId> {
    comments
        .iter()
        .map(|c| {
            authors
                .get(&c.author)
                .cloned()
                .map(|author| comment_view(c, author))
                .ok_or(c.author)
        })
        .collect()
}

/// Full view of a file with creator and comment authors resolved.
pub fn file_detail_view(
    file: &File,
    creator: UserView,
    comments: Vec<CommentView>,
) -> FileDetailView {
    FileDetailView {
        id: file.id,
        name: file.name.clone(),
        size: file.size,
        file_type: file.file_type.clone(),
        downloads: file.downloads,
        privacy: file.privacy,
        creator,
        comments,
        locked: file.locked.iter().map(lock_view).collect(),
        grades: file.grades.iter().map(grade_view).collect(),
        average_grade: file.average_grade(),
        created_at: file.created_at,
    }
}

fn lock_view(lock: &Lock) -> LockView {
    LockView {
        user: lock.user,
        created_at: lock.created_at,
    }
}

fn grade_view(grade: &Grade) -> GradeView {
    GradeView {
        user: grade.user,
        grade: grade.grade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedhub_entity::file::CreateFile;
    use seedhub_entity::user::UserRole;

    const INTERNAL_KEYS: [&str; 8] = [
        "path",
        "hashString",
        "hash_string",
        "isFinished",
        "is_finished",
        "torrentAddedAt",
        "torrent_added_at",
        "password",
    ];

    fn sample_file() -> File {
        let mut file = File::from(CreateFile {
            name: "ubuntu.iso".to_string(),
            path: "/srv/data/ubuntu.iso".to_string(),
            size: 4096,
            creator: UserId::new(),
            hash_string: "abc123".to_string(),
            file_type: "iso".to_string(),
            privacy: 1,
        });
        file.is_finished = true;
        file
    }

    fn view_of(id: UserId, login: &str) -> UserView {
        UserView {
            id,
            login: login.to_string(),
            avatar: String::new(),
            role: UserRole::MEMBER,
        }
    }

    fn assert_no_internal_keys(value: &serde_json::Value) {
        let object = value.as_object().unwrap();
        for key in INTERNAL_KEYS {
            assert!(!object.contains_key(key), "view leaked `{key}`");
        }
    }

    #[test]
    fn test_list_view_flags_follow_viewer() {
        let viewer = UserId::new();
        let other = UserId::new();
        let mut file = sample_file();
        file.add_lock(other).unwrap();
        file.add_grade(viewer, 4.0).unwrap();
        file.add_grade(other, 2.0).unwrap();

        let view = file_list_view(&file, viewer);
        assert!(view.is_locked);
        assert!(!view.locked_by_viewer);
        assert_eq!(view.viewer_grade, Some(4.0));
        assert_eq!(view.average_grade, 3.0);

        let theirs = file_list_view(&file, other);
        assert!(theirs.locked_by_viewer);
    }

    #[test]
    fn test_views_drop_internal_attributes() {
        let file = sample_file();
        let list = serde_json::to_value(file_list_view(&file, UserId::new())).unwrap();
        assert_no_internal_keys(&list);
        assert!(list.get("creator").is_none());
        assert!(list.get("privacy").is_none());

        let detail =
            serde_json::to_value(file_detail_view(&file, view_of(file.creator, "up"), vec![]))
                .unwrap();
        assert_no_internal_keys(&detail);
        assert_eq!(detail["creator"]["login"], "up");
    }

    #[test]
    fn test_comment_list_resolves_authors_in_order() {
        let author = UserId::new();
        let mut file = sample_file();
        file.add_comment(author, "first");
        file.add_comment(author, "second");
        let authors = HashMap::from([(author, view_of(author, "ana"))]);

        let views = comment_list(&file.comments, &authors).unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].text, "first");
        assert_eq!(views[1].author.login, "ana");
    }

    #[test]
    fn test_comment_list_reports_missing_author() {
        let ghost = UserId::new();
        let mut file = sample_file();
        file.add_comment(ghost, "boo");
        assert_eq!(comment_list(&file.comments, &HashMap::new()), Err(ghost));
    }
}
