//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. Member and project deletes are soft (a
//! `deleted_at` timestamp hides the row from reads); blog deletes remove the row.

pub mod blog;
pub mod member;
pub mod project;

#[cfg(test)]
mod test;

/// Builds the `%term%` pattern used by the case-insensitive search queries.
fn contains_pattern(term: &str) -> String {
    format!("%{}%", term.to_lowercase())
}
