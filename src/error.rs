//! Error types for the PDF extraction server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::pdf::PdfError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed client input
    #[error("{0}")]
    Validation(String),

    /// Upload exceeds the configured body limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Referenced local asset does not exist
    #[error("{0}")]
    NotFound(String),

    /// Source other than a local asset path
    #[error("{0}")]
    UnsupportedSource(String),

    /// The PDF library could not process the document
    #[error("Error processing PDF: {0}")]
    Extraction(#[from] PdfError),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::UnsupportedSource(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Extraction(_) | AppError::Server(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
