//! Route definitions for the SeedHub HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::Router;
use axum::routing::{get, post, put};

use crate::handlers;
use crate::state::AppState;

/// Build the routed API, state attached, without outer layers.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(file_routes())
        .merge(comment_routes())
        .merge(user_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// File listing, detail, grade, lock, and download endpoints
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::file::list_files))
        .route("/files/locked", get(handlers::file::list_locked_files))
        .route("/files/{id}", get(handlers::file::get_file))
        .route(
            "/files/{id}/grade",
            post(handlers::grade::add_grade)
                .put(handlers::grade::edit_grade)
                .delete(handlers::grade::delete_grade),
        )
        .route(
            "/files/{id}/lock",
            post(handlers::lock::add_lock).delete(handlers::lock::remove_lock),
        )
        .route("/files/{id}/download", post(handlers::file::record_download))
}

/// Comment thread endpoints
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/files/{id}/comments",
            get(handlers::comment::list_comments).post(handlers::comment::add_comment),
        )
        .route(
            "/files/{id}/comments/{comment_id}",
            put(handlers::comment::edit_comment).delete(handlers::comment::delete_comment),
        )
}

/// User display endpoint
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/{id}", get(handlers::user::get_user))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
