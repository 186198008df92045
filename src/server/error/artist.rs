use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Artist lookup and creation failures
#[derive(Error, Debug)]
pub enum ArtistError {
    /// No artist matches the id or slug
    #[error("Artiste introuvable: {0}")]
    NotFound(String),
    /// The owning account of a new artist does not exist
    #[error("Account {0} not found")]
    AccountNotFound(String),
    /// Another artist already uses the slug
    #[error("Artist slug {0:?} is already taken")]
    SlugTaken(String),
}

impl IntoResponse for ArtistError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref artist_id) => {
                tracing::debug!(artist_id = %artist_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "Artiste introuvable")
            }
            Self::AccountNotFound(_) => error_response(StatusCode::NOT_FOUND, self.to_string()),
            Self::SlugTaken(_) => error_response(StatusCode::CONFLICT, self.to_string()),
        }
    }
}
