//! Authentication Module
//!
//! This module handles user registration, credential verification, and token
//! issuance.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── error.rs        - AuthError
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers (signup, login)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → password hashed → user stored → "User created"
//! 2. **Login**: email and password → hash verified → JWT returned
//! 3. **Protected routes**: JWT in `Authorization: Bearer` → verified by
//!    `middleware::auth` → identity available to handlers
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after the configured lifetime (30 days by default)
//! - Failed signups and failed logins each share a single response

/// Credential processing errors
pub mod error;

/// User data model and database operations
pub mod users;

/// bcrypt password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use error::AuthError;
pub use handlers::{login, signup};
pub use password::BcryptCost;
pub use sessions::{Claims, TokenKeys};
pub use users::{User, UserError};
