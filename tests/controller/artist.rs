use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use folio::{
    model::artist::{ArtistDto, CreateArtistDto},
    server::controller::artist::{create_artist, get_artist, list_artists},
};

use super::*;

fn new_artist(display_name: &str) -> Json<CreateArtistDto> {
    Json(CreateArtistDto {
        account_id: TEST_ACCOUNT_ID.to_string(),
        display_name: display_name.to_string(),
        slug: None,
        tagline: None,
        plan_id: None,
        theme: None,
    })
}

/// Expect 201 with a slug derived from the display name
#[tokio::test]
async fn creates_artist() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_folio_tables()
        .with_account(TEST_ACCOUNT_ID, TEST_USER_ID, "pro")
        .build()
        .await?;

    let result = create_artist(State(test.state()), new_artist("Hélène Dubois")).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let artist: ArtistDto = body_json(resp).await;
    assert_eq!(artist.slug, "helene-dubois");
    assert_eq!(artist.account_id.as_deref(), Some(TEST_ACCOUNT_ID));

    Ok(())
}

/// Expect 409 for a slug already in use and 404 for an unknown account
#[tokio::test]
async fn rejects_conflicts_and_unknown_accounts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_folio_tables()
        .with_account(TEST_ACCOUNT_ID, TEST_USER_ID, "pro")
        .with_artist("artist-1", TEST_ACCOUNT_ID, "camille")
        .build()
        .await?;

    let result = create_artist(State(test.state()), new_artist("Camille")).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let Json(mut orphan) = new_artist("Nina");
    orphan.account_id = "account-inconnu".to_string();
    let result = create_artist(State(test.state()), Json(orphan)).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an empty live list from an empty store
#[tokio::test]
async fn lists_empty_store() -> Result<(), TestError> {
    let test = test_setup_with_folio_tables!()?;

    let result = list_artists(State(test.state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(header(&resp, "x-data-source"), Some("live"));
    let artists: Vec<ArtistDto> = body_json(resp).await;
    assert!(artists.is_empty());

    Ok(())
}

/// Expect demo artists when the store fails
#[tokio::test]
async fn lists_demo_artists_when_store_fails() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = list_artists(State(test.state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(header(&resp, "x-data-source"), Some("fixture"));
    let artists: Vec<ArtistDto> = body_json(resp).await;
    assert_eq!(artists.len(), 2);

    Ok(())
}

/// Expect an artist by slug from the store
#[tokio::test]
async fn gets_artist_by_slug() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_folio_tables()
        .with_account(TEST_ACCOUNT_ID, TEST_USER_ID, "pro")
        .with_artist("artist-1", TEST_ACCOUNT_ID, "camille")
        .build()
        .await?;

    let result = get_artist(State(test.state()), Path("camille".to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let artist: ArtistDto = body_json(resp).await;
    assert_eq!(artist.id, "artist-1");

    Ok(())
}
