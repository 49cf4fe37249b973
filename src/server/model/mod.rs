//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod auth;
pub mod blog;
pub mod member;
pub mod project;
pub mod search;
pub mod storage;
