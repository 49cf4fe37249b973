//! HTTP handlers.
//!
//! Handlers extract request data, call into the service layer and convert domain models
//! to DTOs. Access control for mutating routes is applied by the router, not here.

pub mod auth;
pub mod blog;
pub mod health;
pub mod member;
pub mod project;
pub mod search;
pub mod storage;
