use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AdminClaims,
    service::auth::TokenService,
    state::AppState,
};

/// Checks that a request carries a valid admin bearer token.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// Verifies the `Authorization: Bearer <token>` header.
    ///
    /// The scheme is matched case-insensitively. Every failure, whether the header is
    /// missing, malformed, expired or forged, ends up as a 401.
    ///
    /// # Returns
    /// - `Ok(AdminClaims)` - Claims of the verified token
    /// - `Err(AppError::AuthErr(MissingToken))` - No usable bearer header
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token failed verification
    pub fn require(&self, headers: &HeaderMap) -> Result<AdminClaims, AppError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;

        Ok(self.tokens.verify(token)?)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Access gate for the protected router.
///
/// Rejects the request before it reaches the handler unless it carries a valid admin
/// token; on success the verified claims are available to handlers as
/// `Extension<AdminClaims>`.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(req.headers())?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
