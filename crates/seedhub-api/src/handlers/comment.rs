//! Comment thread handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use seedhub_core::error::AppError;
use seedhub_core::types::{CommentId, FileId};
use seedhub_entity::file::CommentView;

use crate::dto::request::CommentRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/files/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<FileId>,
) -> Result<Json<ApiResponse<Vec<CommentView>>>, ApiError> {
    let comments = state.file_service.get_comments(id).await?;
    Ok(Json(ApiResponse::ok(comments)))
}

/// POST /api/files/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FileId>,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CommentView>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let comment = state
        .comment_service
        .add_comment(&auth, id, &req.text)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment))))
}

/// PUT /api/files/{id}/comments/{comment_id}
pub async fn edit_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, comment_id)): Path<(FileId, CommentId)>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .comment_service
        .edit_comment(&auth, id, comment_id, &req.text)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Comment updated"))))
}

/// DELETE /api/files/{id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, comment_id)): Path<(FileId, CommentId)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .comment_service
        .delete_comment(&auth, id, comment_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Comment deleted"))))
}
