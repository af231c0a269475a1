//! Grade handlers. All act on the caller's own grade.

use axum::Json;
use axum::extract::{Path, State};

use seedhub_core::types::FileId;

use crate::dto::request::GradeRequest;
use crate::dto::response::{ApiResponse, GradeResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/files/{id}/grade
pub async fn add_grade(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FileId>,
    Json(req): Json<GradeRequest>,
) -> Result<Json<ApiResponse<GradeResponse>>, ApiError> {
    let average_grade = state
        .grade_service
        .add_grade(&auth, id, req.checked()?)
        .await?;
    Ok(Json(ApiResponse::ok(GradeResponse { average_grade })))
}

/// PUT /api/files/{id}/grade
pub async fn edit_grade(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FileId>,
    Json(req): Json<GradeRequest>,
) -> Result<Json<ApiResponse<GradeResponse>>, ApiError> {
    let average_grade = state
        .grade_service
        .edit_grade(&auth, id, req.checked()?)
        .await?;
    Ok(Json(ApiResponse::ok(GradeResponse { average_grade })))
}

/// DELETE /api/files/{id}/grade
pub async fn delete_grade(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FileId>,
) -> Result<Json<ApiResponse<GradeResponse>>, ApiError> {
    let average_grade = state.grade_service.delete_grade(&auth, id).await?;
    Ok(Json(ApiResponse::ok(GradeResponse { average_grade })))
}
