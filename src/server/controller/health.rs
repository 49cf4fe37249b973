use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::HealthDto, server::state::AppState};

pub static HEALTH_TAG: &str = "health";

/// Liveness and readiness probe.
///
/// Pings the database.
///
/// # Returns
/// - `200 OK` - `{status: "ok", database: "connected"}`
/// - `500 Internal Server Error` - `{status: "error", error: "Database ping failed"}`
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service and database are up", body = HealthDto),
        (status = 500, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok".to_string(),
                database: Some("connected".to_string()),
                error: None,
            }),
        ),
        Err(err) => {
            tracing::error!("Health check database ping failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthDto {
                    status: "error".to_string(),
                    database: None,
                    error: Some("Database ping failed".to_string()),
                }),
            )
        }
    }
}
