use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected route.
    #[error("Missing or malformed bearer token")]
    MissingToken,

    /// Token failed signature, format or expiry validation.
    ///
    /// The underlying reason is only logged; clients always see the same 401 body.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Login attempted with a password that does not match the admin password.
    #[error("Invalid admin password")]
    InvalidPassword,

    /// Signing a freshly issued token failed.
    #[error("Failed to sign token: {0}")]
    TokenCreation(jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized with a generic message
/// - `InvalidPassword` → 401 Unauthorized with "Invalid password"
/// - `TokenCreation` → 500 Internal Server Error
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                tracing::debug!("Rejected request: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidPassword => {
                tracing::debug!("Rejected login attempt with invalid password");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::TokenCreation(err) => {
                tracing::error!("Failed to sign token: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Error generating token".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
