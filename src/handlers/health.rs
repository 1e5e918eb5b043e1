use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Liveness probe; independent of stored data, so it always returns 200 OK.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    tracing::info!("Health check requested");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: state.config.api_version.clone(),
        }),
    )
}
