//! Core traits defined in `seedhub-core` and implemented by other crates.

pub mod document;

pub use document::DocumentStore;
