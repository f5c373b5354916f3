//! Request-level error type.
//!
//! Handlers return `Result<T, ApiError>`. Client mistakes are echoed back as a
//! JSON string body; storage failures are logged in full and replaced by a
//! generic message so SQL and file paths never reach the caller.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{debug, error};

use crate::store::StoreError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-supplied fields failed validation.
    #[error("{0}")]
    Validation(String),

    /// The request body could not be bound to the expected shape.
    #[error(transparent)]
    Rejected(#[from] JsonRejection),

    /// The store could not complete the operation.
    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                debug!(%message, "rejected invalid submission");
                (StatusCode::BAD_REQUEST, Json(message)).into_response()
            }
            ApiError::Rejected(rejection) => {
                debug!(error = %rejection, "rejected malformed body");
                (rejection.status(), Json(rejection.body_text())).into_response()
            }
            ApiError::Persistence(e) => {
                error!(error = %e, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(INTERNAL_ERROR_MESSAGE),
                )
                    .into_response()
            }
        }
    }
}
