use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Request payload validation failures, answered with 400
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after trimming
    #[error("Le champ {0} est requis")]
    EmptyField(&'static str),
    /// Email address is not `local@domain.tld`
    #[error("Email invalide")]
    InvalidEmail,
    /// Slug is not lowercase letters, digits, and single hyphens
    #[error("Slug invalide: {0:?}")]
    InvalidSlug(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
