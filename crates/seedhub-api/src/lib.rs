//! # seedhub-api
//!
//! HTTP API layer for SeedHub built on Axum.
//!
//! Every route lives under `/api` and, apart from the health check,
//! requires a valid `X-Access-Token`.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
