/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`:
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // query the user store
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::BcryptCost;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::graphql::schema::{build_schema, AuthSchema};
use crate::shared::config::ServerConfig;

/// Application state shared by every handler
///
/// Every field is cheap to clone: the pool and the schema are reference
/// counted internally.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool for the user store
    pub db_pool: SqlitePool,

    /// Token signing and verification keys
    pub tokens: TokenKeys,

    /// Work factor for new password hashes
    pub bcrypt_cost: BcryptCost,

    /// Executable GraphQL schema, holding its own pool handle
    pub schema: AuthSchema,
}

impl AppState {
    /// Assemble state around an open pool
    ///
    /// # Arguments
    ///
    /// * `db_pool` - Migrated database pool
    /// * `config` - Validated server configuration
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self {
            schema: build_schema(db_pool.clone()),
            tokens: TokenKeys::from_config(config),
            bcrypt_cost: BcryptCost(config.bcrypt_cost),
            db_pool,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for BcryptCost {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.bcrypt_cost
    }
}

impl FromRef<AppState> for AuthSchema {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.schema.clone()
    }
}
