//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let (code, status) = match state.stores.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
    };

    let body = HealthResponse {
        status: status.to_string(),
        store: state.stores.backend().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let response = ApiResponse {
        success: code.is_success(),
        data: body,
    };
    (code, Json(response))
}
