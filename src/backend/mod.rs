//! Backend Module
//!
//! This module contains all server-side code for authql: the Axum HTTP
//! server, authentication handlers, the authorization middleware, the GraphQL
//! schema, and SQLite persistence.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database pool
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, JWT tokens, signup/login handlers
//! - **`middleware`** - Bearer-token authorization for protected routes
//! - **`graphql`** - Schema, resolvers, and the `/graphql` handler
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── graphql/        - GraphQL schema and handler
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! POST /auth/signup ─► validate ─► bcrypt hash ─► INSERT users
//! POST /auth/login  ─► SELECT user ─► bcrypt verify ─► sign JWT
//! POST /graphql     ─► auth_middleware ─► GraphQL executor
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the SQLite pool, the token signing
//! keys, the bcrypt cost, and the built GraphQL schema. Everything in it is
//! cheap to clone; there is no other shared mutable state.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// GraphQL schema and endpoint
pub mod graphql;

/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
