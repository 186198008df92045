use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use folio::{
    model::{
        runtime::{ResolveHostQuery, RuntimeContactDto, RuntimeEventDto, RuntimeResolutionDto},
    },
    server::controller::runtime::{record_event, resolve_host, submit_contact},
};

use super::*;

fn host(host: &str) -> Query<ResolveHostQuery> {
    Query(ResolveHostQuery {
        host: host.to_string(),
    })
}

fn contact(artist_id: &str) -> Json<RuntimeContactDto> {
    Json(RuntimeContactDto {
        artist_id: artist_id.to_string(),
        name: "Camille".to_string(),
        email: "camille@example.com".to_string(),
        message: "Bonjour !".to_string(),
    })
}

/// Expect a cacheable fixture resolution flagged as degraded when the store fails
#[tokio::test]
async fn resolves_fixture_host_with_headers() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = resolve_host(State(test.state()), host("lys-astrale.portfolio.local")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "cache-control"), Some("public, max-age=60"));
    assert_eq!(header(&resp, "x-data-source"), Some("fixture"));
    assert_eq!(header(&resp, "x-fallback-cause"), Some("store-unavailable"));

    let resolution: RuntimeResolutionDto = body_json(resp).await;
    assert!(resolution.degraded);
    assert_eq!(resolution.artist.slug, "lys-astrale");
    assert_eq!(resolution.navigation.len(), 3);

    Ok(())
}

/// Expect a live resolution for a stored artist
#[tokio::test]
async fn resolves_store_host() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_folio_tables()
        .with_account(TEST_ACCOUNT_ID, TEST_USER_ID, "pro")
        .with_artist("artist-1", TEST_ACCOUNT_ID, "camille")
        .build()
        .await?;

    let result = resolve_host(State(test.state()), host("camille.folio.app:443")).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "x-data-source"), Some("live"));
    assert_eq!(header(&resp, "x-fallback-cause"), None);

    Ok(())
}

/// Expect 404 for an unknown host
#[tokio::test]
async fn fails_for_unknown_host() -> Result<(), TestError> {
    let test = test_setup_with_folio_tables!()?;

    let result = resolve_host(State(test.state()), host("inconnu.example")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 202 for any named event
#[tokio::test]
async fn records_event() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = record_event(
        State(test.state()),
        Json(RuntimeEventDto {
            event: "page_view".to_string(),
            payload: None,
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "recorded");

    Ok(())
}

/// Expect 202 for a plan with contact and 403 for the free plan
#[tokio::test]
async fn gates_contact_by_plan() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let accepted = submit_contact(State(test.state()), contact("lys-astrale")).await;
    let resp = accepted.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "queued");

    let refused = submit_contact(State(test.state()), contact("atelier-nova")).await;
    let resp = refused.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 for a contact request without message
#[tokio::test]
async fn rejects_incomplete_contact() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let Json(mut payload) = contact("lys-astrale");
    payload.message = String::new();

    let result = submit_contact(State(test.state()), Json(payload)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
