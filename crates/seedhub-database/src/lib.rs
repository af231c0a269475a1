//! # seedhub-database
//!
//! Document store abstractions for SeedHub and their two implementations:
//! PostgreSQL (one row per document, embedded collections as JSONB) and a
//! process-local memory store.

pub mod backend;
pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use backend::Stores;
pub use connection::DatabasePool;
pub use store::{FileStore, UserStore};
