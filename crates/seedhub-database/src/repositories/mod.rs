//! PostgreSQL store implementations.

pub mod file;
pub mod user;

pub use file::PgFileStore;
pub use user::PgUserStore;
