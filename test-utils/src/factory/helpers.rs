//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member and a blog authored by that member.
///
/// # Returns
/// - `Ok((member, blog))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_blog_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::member::Model, entity::blog::Model), DbErr> {
    let member = crate::factory::member::create_member(db).await?;
    let blog = crate::factory::blog::create_blog(db, member.id).await?;

    Ok((member, blog))
}
