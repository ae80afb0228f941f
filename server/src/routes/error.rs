//! HTTP error mapping for API handlers.
//!
//! Every failure leaves the API as `{"error": "<message>"}` with a status
//! that tells the console whether retrying with different input can help.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::ErrorBody;
use tracing::error;

use crate::services::repo::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    /// Request body rejected before reaching the handler logic.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("{0}")]
    Unprocessable(String),
    #[error("missing or invalid bearer token")]
    Unauthorized,
    #[error("upload storage failed: {0}")]
    Storage(#[from] std::io::Error),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Repo(RepoError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Repo(RepoError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Repo(RepoError::Reference(_) | RepoError::Invalid(_)) | Self::Unprocessable(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Repo(RepoError::Database(_)) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rejected { status, .. } => *status,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    /// Message safe to show to the console user.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.status().is_server_error() {
            "internal server error".to_owned()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}
