//! Process-local stores on top of `DashMap`.
//!
//! Used by the `memory` backend and throughout the test suites. Query
//! semantics mirror the PostgreSQL stores, including the `id` tiebreak.

mod eval;
pub mod file;
pub mod user;

pub use file::MemoryFileStore;
pub use user::MemoryUserStore;
