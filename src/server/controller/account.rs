use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        account::{AccountOverviewDto, ArtistSummaryDto},
        api::ErrorDto,
    },
    server::{
        controller::util::{auth_user::AuthUser, source::source_headers},
        error::Error,
        model::app::AppState,
        service::account::AccountService,
    },
};

/// OpenAPI tag of the account endpoints
pub static ACCOUNT_TAG: &str = "account";

/// Get the overview of the caller's account
///
/// Each artist is rated against its effective plan.
#[utoipa::path(
    get,
    path = "/accounts/current",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Account overview", body = AccountOverviewDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Caller owns no account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_account(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let sourced = AccountService::new(&state.db, state.fixture_fallback)
        .get_overview(&user.id)
        .await?;

    Ok((StatusCode::OK, source_headers(&sourced), Json(sourced.into_inner())))
}

/// List the artists of one of the caller's accounts
#[utoipa::path(
    get,
    path = "/accounts/{account_id}/artists",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    params(("account_id" = String, Path, description = "Account id")),
    responses(
        (status = 200, description = "Artists with usage and limits", body = Vec<ArtistSummaryDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Account belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account_artists(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let sourced = AccountService::new(&state.db, state.fixture_fallback)
        .get_artists_for_account(&account_id, &user.id)
        .await?;

    Ok((StatusCode::OK, source_headers(&sourced), Json(sourced.into_inner())))
}
