//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::member::MemberFactory::new(&db)
//!     .name("Ada")
//!     .position("President")
//!     .build()
//!     .await?;
//!
//! let blog = factory::create_blog(&db, member.id).await?;
//! ```

pub mod blog;
pub mod helpers;
pub mod member;
pub mod project;

pub use blog::create_blog;
pub use member::create_member;
pub use project::create_project;
