use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkhop_core::{ShortenerError, ValidationError};
use linkhop_redirector::RedirectorError;
use thiserror::Error;
use tracing::{error, warn};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

pub const WRONG_URL_FORMAT: &str = "Wrong url format";
pub const SHORT_URL_NOT_FOUND: &str = "Short URL not found";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred, please try again";

/// Every failure a handler can produce, with its HTTP translation.
///
/// Validation and not-found are business outcomes with precise messages;
/// allocation and storage failures are reported generically and logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid url: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
    #[error(transparent)]
    Redirector(#[from] RedirectorError),
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, WRONG_URL_FORMAT),
            AppError::Shortener(_) => (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR),
            AppError::Redirector(_) => (StatusCode::NOT_FOUND, SHORT_URL_NOT_FOUND),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(err) => warn!(error = %err, "rejected url"),
            AppError::Shortener(err) => error!(error = %err, "failed to shorten url"),
            AppError::Redirector(RedirectorError::Storage(err)) => {
                warn!(error = %err, "lookup failed, answering not found")
            }
            AppError::Redirector(RedirectorError::NotFound(_)) => {}
        }

        let (status, message) = self.status_and_message();
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
