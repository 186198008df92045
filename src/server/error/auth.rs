use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Bearer token authentication failures, all answered with 401
#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header
    #[error("Missing Authorization header")]
    MissingAuthorization,
    /// Header present but not `Bearer <token>`
    #[error("Malformed Authorization header")]
    MalformedAuthorization,
    /// Token header could not be decoded
    #[error("Malformed JWT")]
    MalformedToken,
    /// Signature does not match the key
    #[error("Signature invalide")]
    InvalidSignature,
    /// Issuer, audience, or required claims rejected
    #[error("Claims JWT non valides")]
    InvalidClaims,
    /// `exp` is in the past
    #[error("Token expiré")]
    TokenExpired,
    /// `nbf` is in the future
    #[error("Token non encore valide")]
    TokenNotYetValid,
    /// No published key matches the token `kid`
    #[error("Aucune clé trouvée pour ce token")]
    UnknownSigningKey,
    /// The key set endpoint failed
    #[error("Impossible de récupérer les clés d'authentification: {0}")]
    KeySetUnavailable(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::KeySetUnavailable(ref reason) => {
                tracing::warn!(reason = %reason, "Key set fetch failed during authentication");

                error_response(
                    StatusCode::UNAUTHORIZED,
                    "Impossible de récupérer les clés d'authentification",
                )
            }
            err => {
                tracing::debug!("Authentication error: {}", err);

                error_response(StatusCode::UNAUTHORIZED, err.to_string())
            }
        }
    }
}
