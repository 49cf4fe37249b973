use serde::{Deserialize, Serialize};

/// Subject embedded in every issued token. There is a single admin identity.
pub const ADMIN_SUBJECT: &str = "admin";

/// Claims carried by an admin bearer token.
///
/// Inserted into request extensions by the access gate once the token is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    /// Issued at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds).
    pub exp: i64,
}

impl AdminClaims {
    pub fn is_admin(&self) -> bool {
        self.sub == ADMIN_SUBJECT
    }
}
