use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{account::AuthProfileDto, api::ErrorDto},
    server::{
        controller::util::{auth_user::AuthUser, source::source_headers},
        error::Error,
        model::app::AppState,
        service::account::AccountService,
    },
};

/// OpenAPI tag of the auth endpoints
pub static AUTH_TAG: &str = "auth";

/// Get the caller's identity and account summary
#[utoipa::path(
    get,
    path = "/auth/profile",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Profile of the authenticated user", body = AuthProfileDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Caller owns no account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let sourced = AccountService::new(&state.db, state.fixture_fallback)
        .get_overview(&user.id)
        .await?;
    let headers = source_headers(&sourced);

    let profile = AuthProfileDto {
        user,
        account: sourced.into_inner().account,
    };

    Ok((StatusCode::OK, headers, Json(profile)))
}
