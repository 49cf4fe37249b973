//! Club Site Test Utils
//!
//! Shared testing utilities for the club site backend. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases, plus factories that insert
//! members, projects and blogs with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_member_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_club_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let member = factory::create_member(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
