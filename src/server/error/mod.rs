//! Error types for the folio server.
//!
//! Each domain (authentication, configuration, validation, artists, pages, accounts, runtime)
//! owns a `thiserror` enum with its own HTTP mapping. They are aggregated into [`Error`], which
//! every service and controller returns, so the `?` operator converts between them.

/// Account overview and ownership errors
pub mod account;
/// Artist lookup and creation errors
pub mod artist;
/// Bearer token errors
pub mod auth;
/// Environment configuration errors
pub mod config;
/// Page read and write errors
pub mod page;
/// Public runtime errors
pub mod runtime;
/// Payload validation errors
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        account::AccountError, artist::ArtistError, auth::AuthError, config::ConfigError,
        page::PageError, runtime::RuntimeError, validation::ValidationError,
    },
};

/// Main error type for the folio server.
///
/// Domain errors carry their own status code mapping; database, parse, and internal errors
/// are reported as 500 with a generic message while the full error is logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Bearer token missing, malformed, or rejected.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request body violates a declared field constraint.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Unknown artist or artist slug conflict.
    #[error(transparent)]
    ArtistError(#[from] ArtistError),
    /// Unknown page, slug conflict, or concurrent edit.
    #[error(transparent)]
    PageError(#[from] PageError),
    /// Unknown account or cross-account access.
    #[error(transparent)]
    AccountError(#[from] AccountError),
    /// Unresolvable host or plan-gated runtime feature.
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
    /// Parse error (failed to parse a stored value).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in folio's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Socket or filesystem error during startup.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 401 Unauthorized - Authentication failures
/// - 403 Forbidden - Cross-account access, plan feature gates
/// - 404 Not Found - Unknown host, artist, page, or account
/// - 409 Conflict - Slug already taken
/// - 412 Precondition Failed - Stale `If-Match` version
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ArtistError(err) => err.into_response(),
            Self::PageError(err) => err.into_response(),
            Self::AccountError(err) => err.into_response(),
            Self::RuntimeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
