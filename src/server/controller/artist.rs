use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        artist::{ArtistDto, CreateArtistDto},
    },
    server::{
        controller::util::source::source_headers, error::Error, model::app::AppState,
        service::artist::ArtistService,
    },
};

/// OpenAPI tag of the artist endpoints
pub static ARTIST_TAG: &str = "artist";

/// List artists, newest first
#[utoipa::path(
    get,
    path = "/artists",
    tag = ARTIST_TAG,
    responses(
        (status = 200, description = "Artists", body = Vec<ArtistDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_artists(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let sourced = ArtistService::new(&state.db, state.fixture_fallback)
        .list()
        .await?;

    Ok((StatusCode::OK, source_headers(&sourced), Json(sourced.into_inner())))
}

/// Get an artist by id or slug
#[utoipa::path(
    get,
    path = "/artists/{artist_id}",
    tag = ARTIST_TAG,
    params(("artist_id" = String, Path, description = "Artist id or slug")),
    responses(
        (status = 200, description = "Artist", body = ArtistDto),
        (status = 404, description = "Unknown artist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let sourced = ArtistService::new(&state.db, state.fixture_fallback)
        .get(&artist_id)
        .await?;

    Ok((StatusCode::OK, source_headers(&sourced), Json(sourced.into_inner())))
}

/// Create an artist under an account
///
/// The slug is derived from the display name when omitted.
#[utoipa::path(
    post,
    path = "/artists",
    tag = ARTIST_TAG,
    request_body = CreateArtistDto,
    responses(
        (status = 201, description = "Artist created", body = ArtistDto),
        (status = 400, description = "Missing name or invalid slug", body = ErrorDto),
        (status = 404, description = "Unknown account", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_artist(
    State(state): State<AppState>,
    Json(artist): Json<CreateArtistDto>,
) -> Result<impl IntoResponse, Error> {
    let artist = ArtistService::new(&state.db, state.fixture_fallback)
        .create(artist)
        .await?;

    Ok((StatusCode::CREATED, Json(artist)))
}
