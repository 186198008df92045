use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        page::{ListPagesQuery, PageDto, PatchPageDto, UpsertPageDto},
    },
    server::{
        controller::util::{
            if_match::{expected_version, version_etag},
            source::source_headers,
        },
        error::Error,
        model::app::AppState,
        service::page::PageService,
    },
};

/// OpenAPI tag of the page endpoints
pub static PAGE_TAG: &str = "page";

/// List an artist's pages by order index
#[utoipa::path(
    get,
    path = "/artists/{artist_id}/pages",
    tag = PAGE_TAG,
    params(
        ("artist_id" = String, Path, description = "Artist id or slug"),
        ListPagesQuery
    ),
    responses(
        (status = 200, description = "Pages", body = Vec<PageDto>),
        (status = 404, description = "Unknown artist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pages(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    Query(query): Query<ListPagesQuery>,
) -> Result<impl IntoResponse, Error> {
    let sourced = PageService::new(&state.db, state.fixture_fallback)
        .list(&artist_id, query)
        .await?;

    Ok((StatusCode::OK, source_headers(&sourced), Json(sourced.into_inner())))
}

/// Get a page with its ordered sections
#[utoipa::path(
    get,
    path = "/artists/{artist_id}/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("artist_id" = String, Path, description = "Artist id or slug"),
        ("page_id" = String, Path, description = "Page id")
    ),
    responses(
        (status = 200, description = "Page, `ETag` holds its version", body = PageDto),
        (status = 404, description = "Unknown page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path((artist_id, page_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let sourced = PageService::new(&state.db, state.fixture_fallback)
        .get(&artist_id, &page_id)
        .await?;
    let etag = version_etag(sourced.data().version);

    Ok((
        StatusCode::OK,
        source_headers(&sourced),
        [(header::ETAG, etag)],
        Json(sourced.into_inner()),
    ))
}

/// Create a page at the end of the artist's page order
#[utoipa::path(
    post,
    path = "/artists/{artist_id}/pages",
    tag = PAGE_TAG,
    params(("artist_id" = String, Path, description = "Artist id or slug")),
    request_body = UpsertPageDto,
    responses(
        (status = 201, description = "Page created", body = PageDto),
        (status = 400, description = "Empty title or invalid slug", body = ErrorDto),
        (status = 404, description = "Unknown artist", body = ErrorDto),
        (status = 409, description = "Slug used by another page of the artist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_page(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    Json(page): Json<UpsertPageDto>,
) -> Result<impl IntoResponse, Error> {
    let page = PageService::new(&state.db, state.fixture_fallback)
        .create(&artist_id, page)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::ETAG, version_etag(page.version))],
        Json(page),
    ))
}

/// Replace a page and its section set
///
/// Honours `If-Match` with the version from the page's `ETag`.
#[utoipa::path(
    put,
    path = "/artists/{artist_id}/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("artist_id" = String, Path, description = "Artist id or slug"),
        ("page_id" = String, Path, description = "Page id"),
        ("If-Match" = Option<String>, Header, description = "Expected page version")
    ),
    request_body = UpsertPageDto,
    responses(
        (status = 200, description = "Page updated", body = PageDto),
        (status = 400, description = "Empty title or invalid slug", body = ErrorDto),
        (status = 404, description = "Unknown artist or page", body = ErrorDto),
        (status = 409, description = "Slug used by another page of the artist", body = ErrorDto),
        (status = 412, description = "Page changed since it was read", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_page(
    State(state): State<AppState>,
    Path((artist_id, page_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(page): Json<UpsertPageDto>,
) -> Result<impl IntoResponse, Error> {
    let expected = expected_version(&headers)?;

    let page = PageService::new(&state.db, state.fixture_fallback)
        .update(&artist_id, &page_id, expected, page)
        .await?;

    Ok((
        StatusCode::OK,
        [(header::ETAG, version_etag(page.version))],
        Json(page),
    ))
}

/// Change only the supplied fields of a page
#[utoipa::path(
    patch,
    path = "/artists/{artist_id}/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("artist_id" = String, Path, description = "Artist id or slug"),
        ("page_id" = String, Path, description = "Page id"),
        ("If-Match" = Option<String>, Header, description = "Expected page version")
    ),
    request_body = PatchPageDto,
    responses(
        (status = 200, description = "Page patched", body = PageDto),
        (status = 400, description = "Empty title or invalid slug", body = ErrorDto),
        (status = 404, description = "Unknown artist or page", body = ErrorDto),
        (status = 409, description = "Slug used by another page of the artist", body = ErrorDto),
        (status = 412, description = "Page changed since it was read", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_page(
    State(state): State<AppState>,
    Path((artist_id, page_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(page): Json<PatchPageDto>,
) -> Result<impl IntoResponse, Error> {
    let expected = expected_version(&headers)?;

    let page = PageService::new(&state.db, state.fixture_fallback)
        .patch(&artist_id, &page_id, expected, page)
        .await?;

    Ok((
        StatusCode::OK,
        [(header::ETAG, version_etag(page.version))],
        Json(page),
    ))
}

/// Change only the supplied fields of a page addressed by id
#[utoipa::path(
    patch,
    path = "/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = String, Path, description = "Page id"),
        ("If-Match" = Option<String>, Header, description = "Expected page version")
    ),
    request_body = PatchPageDto,
    responses(
        (status = 200, description = "Page patched", body = PageDto),
        (status = 400, description = "Empty title or invalid slug", body = ErrorDto),
        (status = 404, description = "Unknown page", body = ErrorDto),
        (status = 409, description = "Slug used by another page of the artist", body = ErrorDto),
        (status = 412, description = "Page changed since it was read", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_page_by_id(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    headers: HeaderMap,
    Json(page): Json<PatchPageDto>,
) -> Result<impl IntoResponse, Error> {
    let expected = expected_version(&headers)?;

    let page = PageService::new(&state.db, state.fixture_fallback)
        .patch_by_id(&page_id, expected, page)
        .await?;

    Ok((
        StatusCode::OK,
        [(header::ETAG, version_etag(page.version))],
        Json(page),
    ))
}
