use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::StatusDto;

/// OpenAPI tag of the health endpoints
pub static HEALTH_TAG: &str = "health";

/// Liveness probe, does not touch the store
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is up", body = StatusDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(StatusDto::new("ok")))
}
