use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Generic acknowledgement carrying only a status label
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusDto {
    pub status: String,
}

impl StatusDto {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
