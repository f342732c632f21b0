/**
 * Database Connection
 *
 * Builds the SQLite connection pool and applies the migrations in
 * `migrations/`. Unlike a best-effort optional store, the user table is
 * required: any failure here aborts startup.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::server::StartupError;

/// Connect to the database at `url` and run pending migrations
///
/// # Arguments
///
/// * `url` - sqlx SQLite connection string
/// * `max_connections` - Pool size
///
/// # Returns
///
/// A migrated connection pool
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, StartupError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply the embedded migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StartupError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// A migrated, private in-memory database
///
/// Each call yields a fresh store. The pool holds exactly one connection
/// that never expires, since an in-memory SQLite database lives only as
/// long as its connection.
pub async fn connect_in_memory() -> Result<SqlitePool, StartupError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}
