//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; a bare `cargo run` talks to a local database.
//!
//! - `CHAI_DATABASE_URL` - Document store connection string
//!   (falls back to `DATABASE_URL`, then to `postgres://localhost:5432/mangal_chai`)
//! - `API_HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 8001)
//! - `ALLOWED_ORIGINS` - Comma-separated CORS origins (default: local dev servers)
//! - `DATABASE_MAX_CONNECTIONS` - Connection pool size (default: 10)
//! - `RUN_MIGRATIONS` - Apply pending migrations on startup (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Store used when no connection string is configured.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/mangal_chai";

/// Origins of the storefront dev servers.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:3000",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Document store connection URL (may contain a password)
    pub database_url: SecretString,
    /// Maximum pooled store connections
    pub database_max_connections: u32,
    /// Whether to apply migrations before serving
    pub run_migrations: bool,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("CHAI_DATABASE_URL");
        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", "10")?;
        let run_migrations = parse_env("RUN_MIGRATIONS", "true")?;
        let host = parse_env("API_HOST", "0.0.0.0")?;
        let port = parse_env("PORT", "8001")?;
        let allowed_origins = get_optional_env("ALLOWED_ORIGINS")
            .map_or_else(default_origins, |raw| parse_origins(&raw));

        Ok(Self {
            database_url,
            database_max_connections,
            run_migrations,
            host,
            port,
            allowed_origins,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ApiConfig {
    /// Local development settings, as if no variable were set.
    fn default() -> Self {
        Self {
            database_url: SecretString::from(DEFAULT_DATABASE_URL),
            database_max_connections: 10,
            run_migrations: true,
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8001,
            allowed_origins: default_origins(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the store URL, trying `primary_key`, then `DATABASE_URL`, then the local default.
fn get_database_url(primary_key: &str) -> SecretString {
    get_optional_env(primary_key)
        .or_else(|| get_optional_env("DATABASE_URL"))
        .map_or_else(
            || SecretString::from(DEFAULT_DATABASE_URL),
            SecretString::from,
        )
}

/// Get an optional environment variable, treating an empty value as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_optional_env(key).unwrap_or_else(|| default.to_owned());
    raw.parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}

fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|&origin| origin.to_owned())
        .collect()
}

/// Split a comma-separated origin list, trimming whitespace and dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}
