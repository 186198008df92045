//! End-to-end requests through the full router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use folio::server::{model::app::AppState, router::routes};
use folio_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, header};

fn app(test: &TestContext) -> axum::Router {
    let state: AppState = test.state();
    routes().with_state(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Expect the health probe to answer without touching the store
#[tokio::test]
async fn serves_health() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(&test).oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");

    Ok(())
}

/// Expect the demo tenant with caching and provenance headers
#[tokio::test]
async fn resolves_demo_host() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(&test)
        .oneshot(get("/runtime/resolve?host=lys-astrale.portfolio.local"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "cache-control"), Some("public, max-age=60"));
    assert_eq!(header(&resp, "x-data-source"), Some("fixture"));
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["artist"]["slug"], "lys-astrale");
    assert_eq!(body["ttlSeconds"], 60);
    assert_eq!(body["degraded"], true);
    assert_eq!(body["navigation"][1]["href"], "/lys-astrale/galerie");

    Ok(())
}

/// Expect a page created over HTTP to come back with its sections in order
#[tokio::test]
async fn creates_and_reads_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_folio_tables()
        .with_account(TEST_ACCOUNT_ID, TEST_USER_ID, "pro")
        .with_artist("artist-1", TEST_ACCOUNT_ID, "camille")
        .build()
        .await?;
    let payload = serde_json::json!({
        "title": "Galerie",
        "slug": "galerie",
        "status": "draft",
        "isHidden": false,
        "sections": [
            { "type": "hero", "data": { "title": "Bienvenue" } },
            { "type": "gallery" },
            { "type": "contact", "isVisible": false }
        ]
    });

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/artists/artist-1/pages")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = body_json(resp).await;
    assert_eq!(created["isHidden"], true);
    let page_id = created["id"].as_str().unwrap().to_string();

    let resp = app(&test)
        .oneshot(get(&format!("/artists/camille/pages/{}", page_id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "etag"), Some("\"1\""));
    let page: serde_json::Value = body_json(resp).await;
    let sections = page["sections"].as_array().unwrap();
    let types: Vec<&str> = sections.iter().map(|s| s["type"].as_str().unwrap()).collect();
    let orders: Vec<i64> = sections.iter().map(|s| s["orderIndex"].as_i64().unwrap()).collect();
    assert_eq!(types, vec!["hero", "gallery", "contact"]);
    assert_eq!(orders, vec![0, 1, 2]);
    assert_eq!(sections[2]["isVisible"], false);

    Ok(())
}

/// Expect 401 on a protected route without a bearer token
#[tokio::test]
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_jwks_endpoint(0).build().await?;

    let resp = app(&test).oneshot(get("/accounts/current")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}

/// Expect a verified token to reach the caller's account
#[tokio::test]
async fn serves_account_to_verified_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_folio_tables()
        .with_account(TEST_ACCOUNT_ID, TEST_USER_ID, "studio")
        .with_jwks_endpoint(1)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/accounts/current")
                .header("authorization", test.auth().bearer(TEST_USER_ID)?)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["account"]["id"], TEST_ACCOUNT_ID);
    assert_eq!(body["account"]["plan"]["id"], "studio");
    test.assert_mocks();

    Ok(())
}

/// Expect 401 for an expired token
#[tokio::test]
async fn rejects_expired_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_jwks_endpoint(1).build().await?;
    let mut claims = test.auth().claims(TEST_USER_ID);
    claims["exp"] = serde_json::json!(1_000);
    let token = test.auth().sign_token(&claims)?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/auth/profile")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the OpenAPI document to list the page routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(&test).oneshot(get("/docs/openapi.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"]["/artists/{artist_id}/pages/{page_id}"].is_object());
    assert!(doc["paths"]["/pages/{page_id}"]["patch"].is_object());

    Ok(())
}
