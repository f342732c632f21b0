//! Server configuration module
//!
//! Provides `ServerConfig`, built either programmatically through
//! `ServerConfig::builder()` or from environment variables with
//! `ServerConfig::from_env()`.
//!
//! # Environment Variables
//!
//! | Variable             | Default                        |
//! |----------------------|--------------------------------|
//! | `DATABASE_URL`       | `sqlite://authql.db?mode=rwc`  |
//! | `JWT_SECRET`         | required                       |
//! | `JWT_TTL_SECS`       | `2592000` (30 days)            |
//! | `BCRYPT_COST`        | `bcrypt::DEFAULT_COST`         |
//! | `SERVER_PORT`        | `3000`                         |
//! | `CORS_ORIGIN`        | unset (any origin)             |
//! | `DB_MAX_CONNECTIONS` | `5`                            |

use std::fmt;
use std::str::FromStr;

use axum::http::HeaderValue;
use thiserror::Error;

/// Default SQLite database location.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://authql.db?mode=rwc";

/// Default token lifetime: 30 days.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default size of the database connection pool.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Shortest accepted HMAC signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 16;

/// Range of work factors bcrypt accepts.
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// sqlx connection string for the user store
    pub database_url: String,
    /// HMAC secret for signing tokens
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: u64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Listening port
    pub port: u16,
    /// Allowed cross-origin caller; any origin when `None`
    pub cors_origin: Option<String>,
    /// Upper bound on pooled database connections
    pub db_max_connections: u32,
}

// The signing secret must never end up in logs.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("port", &self.port)
            .field("cors_origin", &self.cors_origin)
            .field("db_max_connections", &self.db_max_connections)
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults, except `JWT_SECRET` which is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(ttl) = lookup("JWT_TTL_SECS") {
            builder = builder.token_ttl_secs(parse_var("JWT_TTL_SECS", &ttl)?);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &cost)?);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port(parse_var("SERVER_PORT", &port)?);
        }
        if let Some(origin) = lookup("CORS_ORIGIN").filter(|o| !o.trim().is_empty()) {
            builder = builder.cors_origin(origin);
        }
        if let Some(max) = lookup("DB_MAX_CONNECTIONS") {
            builder = builder.db_max_connections(parse_var("DB_MAX_CONNECTIONS", &max)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret {
                minimum: MIN_SECRET_LEN,
            });
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "JWT_TTL_SECS",
                value: "0".to_string(),
            });
        }
        if self.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        self.cors_header()?;
        Ok(())
    }

    /// The configured CORS origin as a header value.
    pub fn cors_header(&self) -> Result<Option<HeaderValue>, ConfigError> {
        self.cors_origin
            .as_deref()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                    key: "CORS_ORIGIN",
                    value: origin.to_string(),
                })
            })
            .transpose()
    }
}

fn parse_var<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
    port: Option<u16>,
    cors_origin: Option<String>,
    db_max_connections: Option<u32>,
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime in seconds
    pub fn token_ttl_secs(mut self, secs: u64) -> Self {
        self.token_ttl_secs = Some(secs);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Restrict cross-origin requests to one origin
    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }

    /// Set the connection pool size
    pub fn db_max_connections(mut self, max: u32) -> Self {
        self.db_max_connections = Some(max);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl_secs: self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            port: self.port.unwrap_or(DEFAULT_PORT),
            cors_origin: self.cors_origin,
            db_max_connections: self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("JWT_SECRET must be at least {minimum} bytes")]
    WeakSecret { minimum: usize },
}
