//! File query and download handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use seedhub_core::types::FileId;
use seedhub_entity::file::{FileDetailView, FileListView};

use crate::dto::request::{ListFilesQuery, LockedFilesQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/files
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<ApiResponse<Vec<FileListView>>>, ApiError> {
    let files = state
        .file_service
        .list(
            query.filters(),
            query.sort()?,
            query.limit.unwrap_or(0),
            auth.user_id,
        )
        .await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// GET /api/files/locked
pub async fn list_locked_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<LockedFilesQuery>,
) -> Result<Json<ApiResponse<Vec<FileListView>>>, ApiError> {
    let files = state
        .file_service
        .list_locked_by_user(auth.user_id, query.direction()?, query.limit.unwrap_or(0))
        .await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// GET /api/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<FileId>,
) -> Result<Json<ApiResponse<FileDetailView>>, ApiError> {
    let file = state.file_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(file)))
}

/// POST /api/files/{id}/download
pub async fn record_download(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<FileId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.download_service.record_download(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Download recorded"))))
}
