use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::{
    model::account::AuthUserDto,
    server::{
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

/// Caller identity taken from a verified `Authorization: Bearer` token
///
/// Rejects the request with 401 when the header is missing or the token fails verification.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthUserDto);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = state.verifier.verify(token).await?;

        Ok(Self(claims.into()))
    }
}

/// Extracts the token of a `Bearer` authorization header, the scheme is case-insensitive
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthorization)?
        .to_str()
        .map_err(|_| AuthError::MalformedAuthorization)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedAuthorization)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MalformedAuthorization);
    }

    Ok(token)
}
