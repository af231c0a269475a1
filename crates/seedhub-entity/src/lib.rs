//! # seedhub-entity
//!
//! Domain entity models for SeedHub. `File` is the central aggregate and
//! owns its comments, grades, and locks as embedded records; every rule that
//! guards those collections lives on the entity itself so that services only
//! load, apply, and save.
//!
//! Display views (`*View`) are the only shapes that leave the server.

pub mod file;
pub mod user;
