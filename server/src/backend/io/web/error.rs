use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::backend::domain::models::entry::EntryValidationError;
use crate::backend::domain::models::goal::GoalValidationError;

/// Error returned by the page handlers
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Input rejected by the domain; nothing was written
    #[error("{0}")]
    BadRequest(String),
    /// Storage or rendering failed
    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(validation) = err.downcast_ref::<GoalValidationError>() {
            return WebError::BadRequest(validation.to_string());
        }
        if let Some(validation) = err.downcast_ref::<EntryValidationError>() {
            return WebError::BadRequest(validation.to_string());
        }
        WebError::Internal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            WebError::Internal(err) => {
                error!("Request failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong. Please reload the page.",
                )
                    .into_response()
            }
        }
    }
}
