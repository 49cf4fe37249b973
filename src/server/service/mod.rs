//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Resolving lookup keys and turning missing rows into 404s
//! - **Orchestration**: Fanning search out over repositories and driving object storage
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod blog;
pub mod content;
pub mod member;
pub mod project;
pub mod search;
pub mod storage;

#[cfg(test)]
mod test;
