//! API data transfer objects.
//!
//! These types define the JSON shapes exchanged over HTTP. Field names are camelCase on
//! the wire. Server-side domain models convert into these at the controller boundary.

pub mod api;
pub mod auth;
pub mod blog;
pub mod member;
pub mod project;
pub mod search;
pub mod storage;
