use std::path::PathBuf;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STAGING_DIR: &str = "test_files";

/// Logging profile selected by `RUN_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Debug,
    Release,
}

impl RunMode {
    fn from_value(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("release") => RunMode::Release,
            _ => RunMode::Debug,
        }
    }

    /// Default tracing filter directive for this mode.
    pub fn log_level(&self) -> &'static str {
        match self {
            RunMode::Debug => "debug",
            RunMode::Release => "info",
        }
    }
}

pub struct Config {
    pub database_url: String,

    pub admin_password: String,
    pub jwt_secret: String,

    pub storage_url: String,
    pub storage_service_key: String,

    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub run_mode: RunMode,
    pub content_staging_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = database_url(
            &required("DB_HOST")?,
            &required("DB_USER")?,
            &required("DB_PASSWORD")?,
            &required("DB_NAME")?,
            &required("DB_PORT")?,
        )?;

        let storage_url = required("SUPABASE_URL")?;
        Url::parse(&storage_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "SUPABASE_URL".to_string(),
            reason: e.to_string(),
        })?;

        let port = match optional("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            admin_password: required("ADMIN_PASSWORD")?,
            jwt_secret: required("JWT_SECRET")?,
            storage_url: storage_url.trim_end_matches('/').to_string(),
            storage_service_key: required("SUPABASE_SERVICE_KEY")?,
            allowed_origins: allowed_origins(optional("ALLOWED_ORIGINS")),
            port,
            run_mode: RunMode::from_value(optional("RUN_MODE")),
            content_staging_dir: optional("CONTENT_STAGING_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STAGING_DIR)),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    non_empty(name, std::env::var(name).ok())
}

/// Treats an unset and an empty variable alike.
fn non_empty(name: &str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Builds the Postgres connection string, percent-encoding the credentials.
pub fn database_url(
    host: &str,
    user: &str,
    password: &str,
    name: &str,
    port: &str,
) -> Result<String, ConfigError> {
    let invalid = |name: &str, reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason,
    };

    let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
        name: "DB_PORT".to_string(),
        reason: e.to_string(),
    })?;

    let mut url = Url::parse(&format!("postgres://{}", host))
        .map_err(|e| invalid("DB_HOST", e.to_string()))?;
    url.set_username(user)
        .map_err(|_| invalid("DB_USER", "cannot set username".to_string()))?;
    url.set_password(Some(password))
        .map_err(|_| invalid("DB_PASSWORD", "cannot set password".to_string()))?;
    url.set_port(Some(port))
        .map_err(|_| invalid("DB_PORT", "cannot set port".to_string()))?;
    url.set_path(name);
    url.set_query(Some("sslmode=require"));

    Ok(url.to_string())
}

/// Splits `ALLOWED_ORIGINS` on commas, falling back to the local dev servers.
pub fn allowed_origins(value: Option<String>) -> Vec<String> {
    match value {
        Some(origins) => origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect(),
        None => DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|origin| origin.to_string())
            .collect(),
    }
}
