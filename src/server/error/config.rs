use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Variable name
        var: String,
        /// Why parsing failed
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
