use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Page lookup and write failures
#[derive(Error, Debug)]
pub enum PageError {
    /// No page matches the artist and id
    #[error("Page not found")]
    NotFound,
    /// The slug collides with another page of the same artist
    #[error("Slug {0:?} is already used by another page of this artist")]
    SlugTaken(String),
    /// The client edited an outdated copy of the page.
    #[error("Page version mismatch: expected {expected}, current {current}")]
    VersionMismatch {
        /// Version named by `If-Match`
        expected: i32,
        /// Version currently stored
        current: i32,
    },
    /// `If-Match` holds something other than `*` or a page version tag.
    #[error("If-Match {0:?} does not name a page version")]
    InvalidIfMatch(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => error_response(StatusCode::NOT_FOUND, self.to_string()),
            Self::SlugTaken(_) => error_response(StatusCode::CONFLICT, self.to_string()),
            Self::VersionMismatch { .. } | Self::InvalidIfMatch(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::PRECONDITION_FAILED, self.to_string())
            }
        }
    }
}
