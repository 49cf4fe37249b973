use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Bucket name is not one of the recognized buckets.
    #[error("Invalid bucket: {0}")]
    InvalidBucket(String),

    /// Payload exceeds the upload size limit; no request was sent to the store.
    #[error("File too large: {size} bytes exceeds the {max} byte limit")]
    FileTooLarge { size: usize, max: usize },

    /// Filename has no usable base name once directory components are stripped.
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// The store rejected the service key during startup verification.
    #[error("Invalid service key (status {status}): {body}")]
    InvalidServiceKey { status: u16, body: String },

    /// A bucket the application relies on does not exist in the store.
    #[error("Required bucket '{0}' not found")]
    MissingBucket(String),

    /// The store answered with a non-success status.
    #[error("Storage request failed (status {status}): {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The request to the store could not be sent or its response not read.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Converts storage errors into HTTP responses.
///
/// - `InvalidBucket`, `FileTooLarge`, `InvalidFilename` → 400 Bad Request
/// - everything else → 500 Internal Server Error, details logged server-side
impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidBucket(_) => (StatusCode::BAD_REQUEST, "Invalid bucket"),
            Self::FileTooLarge { .. } => (StatusCode::BAD_REQUEST, "File too large"),
            Self::InvalidFilename(_) => (StatusCode::BAD_REQUEST, "Invalid filename"),
            _ => {
                tracing::error!("Storage error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage operation failed")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
