//! Admin authentication: password login and bearer token signing.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::auth::AuthError,
    model::auth::{AdminClaims, ADMIN_SUBJECT},
};

/// Lifetime of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Issues and verifies HS256 bearer tokens with a shared secret.
///
/// Tokens are not persisted and cannot be revoked; they stop working once `exp` passes.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Overrides the token lifetime. A negative lifetime yields already expired tokens.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Signs a fresh admin token expiring `ttl` from now.
    pub fn issue(&self) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(AuthError::TokenCreation)
    }

    /// Checks signature and expiry of a token.
    ///
    /// # Returns
    /// - `Ok(AdminClaims)` - The token is valid and names the admin
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered or expired token
    pub fn verify(&self, token: &str) -> Result<AdminClaims, AuthError> {
        let data = decode::<AdminClaims>(token, &self.decoding, &self.validation)?;

        if !data.claims.is_admin() {
            return Err(AuthError::InvalidToken(
                jsonwebtoken::errors::ErrorKind::InvalidSubject.into(),
            ));
        }

        Ok(data.claims)
    }
}

pub struct AuthService<'a> {
    admin_password: &'a str,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(admin_password: &'a str, tokens: &'a TokenService) -> Self {
        Self {
            admin_password,
            tokens,
        }
    }

    /// Exchanges the admin password for a bearer token
    ///
    /// The password is compared by exact string equality. An empty password never
    /// authenticates, even against an empty configured password.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AuthError::InvalidPassword)` - Password is empty or does not match
    pub fn login(&self, password: &str) -> Result<String, AuthError> {
        if password.is_empty() || password != self.admin_password {
            return Err(AuthError::InvalidPassword);
        }

        let token = self.tokens.issue()?;

        tracing::info!("Admin logged in");

        Ok(token)
    }
}
