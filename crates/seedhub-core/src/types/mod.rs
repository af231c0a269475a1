//! Core type definitions used across the SeedHub workspace.

pub mod field;
pub mod filter;
pub mod id;
pub mod query;
pub mod sorting;

pub use field::FileField;
pub use filter::{FilterField, FilterOp, FilterValue};
pub use id::*;
pub use query::FileQuery;
pub use sorting::{SortDirection, SortField};
