//! Lock handlers. All act on the caller's own lock.

use axum::Json;
use axum::extract::{Path, State};

use seedhub_core::types::FileId;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/files/{id}/lock
pub async fn add_lock(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FileId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.lock_service.add_lock(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("File locked"))))
}

/// DELETE /api/files/{id}/lock
pub async fn remove_lock(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FileId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.lock_service.remove_lock(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("File unlocked"))))
}
