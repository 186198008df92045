use axum::{http::StatusCode, response::IntoResponse};
use folio::{model::plan::PlanDto, server::controller::plan::list_plans};

use super::*;

/// Expect the three catalog plans, the free plan first
#[tokio::test]
async fn lists_catalog() -> Result<(), TestError> {
    let resp = list_plans().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let plans: Vec<PlanDto> = body_json(resp).await;
    let ids: Vec<&str> = plans.iter().map(|plan| plan.id.as_str()).collect();
    assert_eq!(ids, vec!["freemium", "pro", "studio"]);
    assert!(!plans[0].contact_enabled);

    Ok(())
}
