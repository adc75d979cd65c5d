use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the meeting endpoints. The cause is logged at the
/// call site; the response only carries the message below.
#[derive(Debug, Error)]
pub enum MeetingError {
    #[error("Failed to create meeting")]
    Create,

    #[error("Failed to fetch meetings")]
    List,

    #[error("No meeting found.")]
    NotFound,

    #[error("No data found.")]
    NoData,

    #[error("{0}")]
    View(String),

    #[error("Failed to delete meeting")]
    Delete,

    #[error("Failed to delete meetings")]
    DeleteMany,

    #[error("{0}")]
    BadRequest(String),

    #[error("User not found")]
    ActorNotFound,
}

impl MeetingError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::List => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound | Self::NoData => StatusCode::NOT_FOUND,
            Self::ActorNotFound => StatusCode::UNAUTHORIZED,
            Self::Create
            | Self::View(_)
            | Self::Delete
            | Self::DeleteMany
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for MeetingError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
