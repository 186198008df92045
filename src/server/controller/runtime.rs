use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        runtime::{
            ContactReceiptDto, ResolveHostQuery, RuntimeContactDto, RuntimeEventDto,
            RuntimeResolutionDto,
        },
    },
    server::{
        controller::util::source::source_headers,
        error::Error,
        model::app::AppState,
        service::runtime::{RuntimeService, RESOLUTION_TTL_SECONDS},
    },
};

/// OpenAPI tag of the runtime endpoints
pub static RUNTIME_TAG: &str = "runtime";

/// Resolve the tenant serving a host
///
/// Matches the host against custom domains, then its first label against subdomains and
/// slugs. Demo tenants are served, with `x-data-source: fixture`, when the store fails or
/// has no match.
#[utoipa::path(
    get,
    path = "/runtime/resolve",
    tag = RUNTIME_TAG,
    params(ResolveHostQuery),
    responses(
        (status = 200, description = "Tenant resolved", body = RuntimeResolutionDto),
        (status = 404, description = "No tenant for this host", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_host(
    State(state): State<AppState>,
    Query(query): Query<ResolveHostQuery>,
) -> Result<impl IntoResponse, Error> {
    let sourced = RuntimeService::new(&state.db, state.fixture_fallback)
        .resolve_host(&query.host)
        .await?;

    Ok((
        StatusCode::OK,
        source_headers(&sourced),
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={}", RESOLUTION_TTL_SECONDS),
        )],
        Json(sourced.into_inner()),
    ))
}

/// Record a telemetry event from an artist site
#[utoipa::path(
    post,
    path = "/runtime/events",
    tag = RUNTIME_TAG,
    request_body = RuntimeEventDto,
    responses(
        (status = 202, description = "Event recorded", body = StatusDto),
        (status = 400, description = "Empty event name", body = ErrorDto)
    ),
)]
pub async fn record_event(
    State(state): State<AppState>,
    Json(event): Json<RuntimeEventDto>,
) -> Result<impl IntoResponse, Error> {
    let status = RuntimeService::new(&state.db, state.fixture_fallback).record_event(event)?;

    Ok((StatusCode::ACCEPTED, Json(status)))
}

/// Send a visitor's contact request to an artist
///
/// Only plans with the contact feature accept requests.
#[utoipa::path(
    post,
    path = "/runtime/contact",
    tag = RUNTIME_TAG,
    request_body = RuntimeContactDto,
    responses(
        (status = 202, description = "Request queued", body = ContactReceiptDto),
        (status = 400, description = "Missing field or invalid email", body = ErrorDto),
        (status = 403, description = "Contact not included in the artist's plan", body = ErrorDto),
        (status = 404, description = "Unknown artist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(contact): Json<RuntimeContactDto>,
) -> Result<impl IntoResponse, Error> {
    let receipt = RuntimeService::new(&state.db, state.fixture_fallback)
        .submit_contact(contact)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
