use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Account lookup and ownership failures
#[derive(Error, Debug)]
pub enum AccountError {
    /// The user owns no account and fixture fallback is disabled
    #[error("No account found for user {0}")]
    NotFound(String),
    /// The account belongs to another user
    #[error("Accès refusé à ce compte")]
    AccessDenied,
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "Compte introuvable")
            }
            Self::AccessDenied => error_response(StatusCode::FORBIDDEN, self.to_string()),
        }
    }
}
