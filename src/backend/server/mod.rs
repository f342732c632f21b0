//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── database.rs     - SQLite pool and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Database**: Connects the pool and applies `migrations/`
//! 2. **State Creation**: Token keys, bcrypt cost, GraphQL schema
//! 3. **Router Creation**: Configures all routes and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use authql::backend::server::create_app;
//! use authql::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Database pool and migrations
pub mod database;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_app_with_pool, StartupError};
pub use state::AppState;
