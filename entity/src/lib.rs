//! SeaORM entities for the club site tables.

pub mod prelude;

pub mod blog;
pub mod member;
pub mod project;
