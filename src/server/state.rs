//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::TokenService, storage::StorageService};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `StorageService` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `Arc<TokenService>` and `Arc<str>` are reference-counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Gateway to the external object store, verified during startup.
    pub storage: StorageService,

    /// Signs and verifies admin bearer tokens.
    pub tokens: Arc<TokenService>,

    /// The single admin credential checked on login.
    pub admin_password: Arc<str>,

    /// Directory the content processor reads staged images from.
    pub staging_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `storage` - Verified storage gateway
    /// - `tokens` - Token issuer/verifier sharing the signing secret
    /// - `admin_password` - Admin credential
    /// - `staging_dir` - Local staging directory for markdown images
    pub fn new(
        db: DatabaseConnection,
        storage: StorageService,
        tokens: TokenService,
        admin_password: &str,
        staging_dir: PathBuf,
    ) -> Self {
        Self {
            db,
            storage,
            tokens: Arc::new(tokens),
            admin_password: Arc::from(admin_password),
            staging_dir: Arc::new(staging_dir),
        }
    }
}
