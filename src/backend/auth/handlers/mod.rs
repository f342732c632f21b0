//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /auth/signup - User registration
//! - **`login`** - POST /auth/login - User authentication
//!
//! Both take a form-encoded body with `email` and `password`.
//!
//! # Example
//!
//! ```rust,no_run
//! use authql::backend::auth::handlers::{signup, login};
//! use authql::backend::server::AppState;
//! use axum::{routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/auth/signup", post(signup))
//!     .route("/auth/login", post(login));
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{Credentials, CredentialsForm, MessageResponse, TokenResponse};

// Re-export handlers
pub use login::login;
pub use signup::signup;
