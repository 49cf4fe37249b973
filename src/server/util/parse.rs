use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a member or project key.
///
/// These keys are accepted without format validation: anything that is not a UUID
/// simply cannot match a stored row, so callers report it as not found.
///
/// # Returns
/// - `Some(Uuid)` - The key is a well-formed UUID
/// - `None` - The key can never match a record
pub fn parse_lookup_key(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value).ok()
}

/// Parses a blog key, rejecting malformed values as a client error.
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed key
/// - `Err(AppError::BadRequest)` - The key is not a UUID
pub fn parse_blog_id(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value)
        .map_err(|_| AppError::BadRequest(format!("Invalid blog ID format: {}", value)))
}
