//! # seedhub-core
//!
//! Core crate for SeedHub. Contains the store traits, configuration schemas,
//! typed identifiers, query/filter/sorting types, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other SeedHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
