//! Process startup: logging, external dependencies and cross-origin policy.
//!
//! Every function here runs once before the server accepts traffic; any error is fatal.

use axum::http::{
    header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN},
    HeaderValue, Method,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, storage::StorageError, AppError},
    service::storage::StorageService,
};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `RUN_MODE`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.run_mode.log_level()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Creates the storage gateway and verifies it before anything else starts.
///
/// # Arguments
/// - `config` - Application configuration containing the storage URL and service key
///
/// # Returns
/// - `Ok(StorageService)` - Gateway with valid credentials and both buckets present
/// - `Err(AppError::StorageErr)` - Store unreachable, key rejected or bucket missing
pub async fn connect_to_storage(config: &Config) -> Result<StorageService, AppError> {
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(StorageError::from)?;

    let storage = StorageService::new(http, &config.storage_url, &config.storage_service_key);

    storage.verify().await?;

    Ok(storage)
}

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a bounded connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up to date before the first
/// request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(10)
        .min_connections(2)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Builds the CORS layer from the configured origin allow-list.
///
/// Credentials are allowed, so origins must be listed explicitly rather than wildcarded.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "ALLOWED_ORIGINS".to_string(),
                reason: format!("{}: {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, CONTENT_LENGTH, CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true))
}
