use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{model::plan::PlanDto, server::service::plan::catalog};

/// OpenAPI tag of the plan endpoints
pub static PLAN_TAG: &str = "plan";

/// List the plan catalog, cheapest first
#[utoipa::path(
    get,
    path = "/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Plans", body = Vec<PlanDto>)
    ),
)]
pub async fn list_plans() -> impl IntoResponse {
    (StatusCode::OK, Json(catalog()))
}
