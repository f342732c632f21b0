//! authql - Main Library
//!
//! authql is an email/password authentication service with a GraphQL endpoint
//! gated by bearer-token authorization.
//!
//! # Overview
//!
//! This library provides:
//! - Account signup with bcrypt password hashing and duplicate-email rejection
//! - Login with credential verification and JWT issuance
//! - Middleware that authorizes requests to `/graphql` from a bearer token
//! - A GraphQL schema whose resolvers see the authenticated identity
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and the fixed response messages
//! - **`backend`** - Axum server, handlers, middleware, persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use authql::backend::server::init::create_app;
//! use authql::shared::config::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::config::ConfigError` for configuration loading
//! - `backend::error::BackendError` for everything that reaches an HTTP response
//!
//! Failures that reach clients are deliberately coarse; detailed causes are
//! logged with `tracing`.

/// Configuration and response messages
pub mod shared;

/// Backend server-side code
pub mod backend;
