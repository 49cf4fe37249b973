use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState, util::extract::ApiJson},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange the admin password for a bearer token.
///
/// The token is valid for 24 hours and must be sent as `Authorization: Bearer <token>` on
/// every mutating route.
///
/// # Returns
/// - `200 OK` - `{token, type: "Bearer"}`
/// - `400 Bad Request` - Body is not `{password}` or the password is empty
/// - `401 Unauthorized` - Wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = TokenDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Token could not be signed", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }

    let token = AuthService::new(&state.admin_password, &state.tokens).login(&payload.password)?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            token_type: "Bearer".to_string(),
        }),
    ))
}
