use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use folio::{
    model::{
        account::{AccountOverviewDto, ArtistSummaryDto, AuthUserDto},
        plan::LimitState,
    },
    server::controller::{
        account::{get_account_artists, get_current_account},
        auth::get_profile,
        util::auth_user::AuthUser,
    },
};

use super::*;

fn user(id: &str) -> AuthUser {
    AuthUser(AuthUserDto {
        id: id.to_string(),
        email: Some(TEST_USER_EMAIL.to_string()),
        role: Some("authenticated".to_string()),
        aud: Some(TEST_AUDIENCE.to_string()),
    })
}

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_folio_tables()
        .with_account(TEST_ACCOUNT_ID, TEST_USER_ID, "freemium")
        .with_account("account-2", "user-2", "pro")
        .with_artist("artist-1", TEST_ACCOUNT_ID, "camille")
        .with_page("page-1", "artist-1", "accueil", false)
        .with_page("page-2", "artist-1", "serie", false)
        .with_page("page-3", "artist-1", "contact", false)
        .build()
        .await
}

/// Expect the caller's live account with per-artist limits
#[tokio::test]
async fn gets_current_account() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_current_account(State(test.state()), user(TEST_USER_ID)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "x-data-source"), Some("live"));
    let overview: AccountOverviewDto = body_json(resp).await;
    assert!(!overview.degraded);
    assert_eq!(overview.account.usage.pages, 3);
    assert_eq!(overview.artists[0].limit.state, LimitState::Blocked);

    Ok(())
}

/// Expect the demo account, flagged, when the store fails
#[tokio::test]
async fn serves_demo_account_when_store_fails() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_current_account(State(test.state()), user(TEST_USER_ID)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(header(&resp, "x-data-source"), Some("fixture"));
    let overview: AccountOverviewDto = body_json(resp).await;
    assert!(overview.degraded);
    assert_eq!(overview.account.plan.id, "pro");

    Ok(())
}

/// Expect the artists of the caller's account and 403 for another account
#[tokio::test]
async fn scopes_artists_to_caller() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_account_artists(
        State(test.state()),
        Path(TEST_ACCOUNT_ID.to_string()),
        user(TEST_USER_ID),
    )
    .await;
    let resp = result.unwrap().into_response();
    let artists: Vec<ArtistSummaryDto> = body_json(resp).await;
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].page_count, 3);

    let result = get_account_artists(
        State(test.state()),
        Path("account-2".to_string()),
        user(TEST_USER_ID),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the caller's claims next to their account summary
#[tokio::test]
async fn gets_profile() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_profile(State(test.state()), user(TEST_USER_ID)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: serde_json::Value = body_json(resp).await;
    assert_eq!(profile["user"]["id"], TEST_USER_ID);
    assert_eq!(profile["user"]["email"], TEST_USER_EMAIL);
    assert_eq!(profile["account"]["id"], TEST_ACCOUNT_ID);
    assert_eq!(profile["account"]["plan"]["id"], "freemium");

    Ok(())
}
