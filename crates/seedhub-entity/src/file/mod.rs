//! File domain entities.
//!
//! A [`File`] owns three embedded collections: an ordered comment thread,
//! one grade per user, and one lock per user. Rule failures on those
//! collections are reported as [`FileRuleError`] values before anything is
//! persisted.

pub mod embedded;
pub mod lookup;
pub mod model;
pub mod rules;
pub mod view;

pub use embedded::{Comment, Grade, Lock};
pub use lookup::position_by_key;
pub use model::{CreateFile, File};
pub use rules::FileRuleError;
pub use view::{CommentView, FileDetailView, FileListView, GradeView, LockView};
