//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware layers
//! └── api_routes.rs   - Auth, GraphQL and health routes
//! ```
//!
//! # Route Types
//!
//! - `POST /auth/signup` - Public
//! - `POST /auth/login` - Public
//! - `GET|POST /graphql` - Bearer token required
//! - `GET /health` - Public
//!
//! Anything else answers `404 Not Found`.

/// Main router creation
pub mod router;

/// Route groups
pub mod api_routes;

pub use router::create_router;
