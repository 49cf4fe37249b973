use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub password: String,
}

/// Bearer token issued after a successful admin login.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    /// Always `"Bearer"`.
    #[serde(rename = "type")]
    pub token_type: String,
}
