//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer-token authorization for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use authql::backend::middleware::auth_middleware;
//! use authql::backend::server::AppState;
//! use axum::{middleware::from_fn_with_state, Router};
//!
//! fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.route_layer(from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
