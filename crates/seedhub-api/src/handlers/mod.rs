//! Route handlers.

pub mod comment;
pub mod file;
pub mod grade;
pub mod health;
pub mod lock;
pub mod user;
