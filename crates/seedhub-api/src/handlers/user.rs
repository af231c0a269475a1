//! User display handler.

use axum::Json;
use axum::extract::{Path, State};

use seedhub_core::types::UserId;
use seedhub_entity::user::UserView;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<UserId>,
) -> Result<Json<ApiResponse<UserView>>, ApiError> {
    let user = state.user_service.lookup_for_display(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}
