use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Public site runtime failures
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Neither the store nor the fixtures know the host
    #[error("Aucun artiste associé à {0}")]
    HostNotFound(String),
    /// The artist plan does not include the contact form
    #[error("Le plan actuel ne permet pas de contacter l'artiste")]
    ContactDisabled,
}

impl IntoResponse for RuntimeError {
    fn into_response(self) -> Response {
        match self {
            Self::HostNotFound(_) => error_response(StatusCode::NOT_FOUND, self.to_string()),
            Self::ContactDisabled => error_response(StatusCode::FORBIDDEN, self.to_string()),
        }
    }
}
