use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::database;
use crate::models::health::{HealthyResponse, UnhealthyResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    operation_id = "root",
    summary = "Service root",
    responses((status = 200, description = "Empty JSON object")),
)]
pub async fn root() -> Json<Map<String, Value>> {
    Json(Map::new())
}

#[utoipa::path(
    get,
    path = "/api/healthchecker",
    tag = "Health",
    operation_id = "healthChecker",
    summary = "Check service and database health",
    description = "Runs `SELECT 1` against the database. Any failure, including an empty result, yields 500.",
    responses(
        (status = 200, description = "Database reachable", body = HealthyResponse),
        (status = 500, description = "Database unreachable", body = UnhealthyResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn health_checker(State(state): State<AppState>) -> impl IntoResponse {
    match database::ping(&state.db).await {
        Ok(()) => (StatusCode::OK, Json(HealthyResponse::default())).into_response(),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UnhealthyResponse::default()),
            )
                .into_response()
        }
    }
}
