//! GraphQL Module
//!
//! The `/graphql` endpoint. Requests reach it only through the auth
//! middleware, so every resolver sees an `AuthenticatedUser`.
//!
//! # Module Structure
//!
//! ```text
//! graphql/
//! ├── mod.rs          - Module exports
//! ├── schema.rs       - Query root and object types
//! └── handler.rs      - HTTP request parsing and execution
//! ```

pub mod schema;
pub mod handler;

pub use handler::{graphql_get, graphql_post};
pub use schema::{build_schema, AuthSchema};
