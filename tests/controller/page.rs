use axum::{
    extract::{Path, Query, State},
    http::{header::IF_MATCH, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use folio::{
    model::page::{
        ListPagesQuery, PageDto, PageStatus, PatchPageDto, SectionInputDto, SectionType,
        UpsertPageDto,
    },
    server::controller::page::{
        create_page, get_page, list_pages, patch_page, patch_page_by_id, update_page,
    },
};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_folio_tables()
        .with_account(TEST_ACCOUNT_ID, TEST_USER_ID, "pro")
        .with_artist("artist-1", TEST_ACCOUNT_ID, "camille")
        .with_page("page-1", "artist-1", "serie", false)
        .build()
        .await
}

fn page_path(page_id: &str) -> Path<(String, String)> {
    Path(("artist-1".to_string(), page_id.to_string()))
}

fn if_match(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(IF_MATCH, HeaderValue::from_static(value));
    headers
}

fn upsert(slug: &str, section_types: &[SectionType]) -> Json<UpsertPageDto> {
    Json(UpsertPageDto {
        title: "Exposition".to_string(),
        slug: slug.to_string(),
        seo_description: Some("Exposition de printemps".to_string()),
        is_hidden: None,
        status: None,
        sections: section_types
            .iter()
            .map(|section_type| SectionInputDto {
                id: None,
                section_type: *section_type,
                data: None,
                is_visible: None,
            })
            .collect(),
    })
}

/// Expect 201 with an ETag for the first version
#[tokio::test]
async fn creates_page_with_etag() -> Result<(), TestError> {
    let test = setup().await?;

    let result = create_page(
        State(test.state()),
        Path("artist-1".to_string()),
        upsert("exposition", &[SectionType::Hero, SectionType::Gallery]),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(header(&resp, "etag"), Some("\"1\""));
    let page: PageDto = body_json(resp).await;
    assert_eq!(page.order_index, 1);
    assert_eq!(page.sections.map(|s| s.len()), Some(2));

    Ok(())
}

/// Expect 200 with the new version when If-Match matches, 412 once it is stale
#[tokio::test]
async fn updates_with_matching_version_only() -> Result<(), TestError> {
    let test = setup().await?;

    let result = update_page(
        State(test.state()),
        page_path("page-1"),
        if_match("\"1\""),
        upsert("serie", &[SectionType::Quote]),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "etag"), Some("\"2\""));

    let result = update_page(
        State(test.state()),
        page_path("page-1"),
        if_match("\"1\""),
        upsert("serie", &[]),
    )
    .await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED);

    Ok(())
}

/// Expect 412 for an If-Match that names no version
#[tokio::test]
async fn rejects_foreign_if_match() -> Result<(), TestError> {
    let test = setup().await?;

    let result = patch_page(
        State(test.state()),
        page_path("page-1"),
        if_match("\"abc\""),
        Json(PatchPageDto::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED);

    Ok(())
}

/// Expect a draft status to hide the page through either patch route
#[tokio::test]
async fn patches_visibility() -> Result<(), TestError> {
    let test = setup().await?;

    let result = patch_page_by_id(
        State(test.state()),
        Path("page-1".to_string()),
        if_match("*"),
        Json(PatchPageDto {
            status: Some(PageStatus::Draft),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto = body_json(resp).await;
    assert!(page.is_hidden);
    assert_eq!(page.status, PageStatus::Draft);

    Ok(())
}

/// Expect 409 when creating a page with a slug the artist already uses
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), TestError> {
    let test = setup().await?;

    let result = create_page(
        State(test.state()),
        Path("artist-1".to_string()),
        upsert("serie", &[]),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect a page with sections and ETag, then 404 for an unknown page
#[tokio::test]
async fn gets_page() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_page(State(test.state()), page_path("page-1")).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "etag"), Some("\"1\""));
    assert_eq!(header(&resp, "x-data-source"), Some("live"));

    let result = get_page(State(test.state()), page_path("page-inconnue")).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect published demo pages when the store fails
#[tokio::test]
async fn lists_demo_pages_when_store_fails() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = list_pages(
        State(test.state()),
        Path("lys-astrale".to_string()),
        Query(ListPagesQuery {
            status: Some(PageStatus::Published),
            include_sections: Some(true),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(header(&resp, "x-data-source"), Some("fixture"));
    let pages: Vec<PageDto> = body_json(resp).await;
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|page| page.sections.is_some()));

    Ok(())
}
