/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * database connection, state creation, and route configuration.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::database;
use crate::backend::server::state::AppState;
use crate::shared::config::{ConfigError, ServerConfig};

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Initialization Steps
///
/// 1. **Connect**: Opens the SQLite pool and runs migrations
/// 2. **Create State**: Builds token keys and the GraphQL schema
/// 3. **Create Router**: Configures all routes and middleware
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing authql backend server");

    let db_pool = database::connect(&config.database_url, config.db_max_connections).await?;
    Ok(create_app_with_pool(db_pool, config)?)
}

/// Build the application around an existing pool
///
/// Used by tests that supply an in-memory database.
pub fn create_app_with_pool(
    db_pool: sqlx::SqlitePool,
    config: &ServerConfig,
) -> Result<Router, ConfigError> {
    let app_state = AppState::new(db_pool, config);
    let app = create_router(app_state, config)?;

    tracing::info!("Router configured");
    Ok(app)
}
