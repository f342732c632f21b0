/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and middleware.
 * Every variant maps to a fixed status code and a fixed response body; the
 * underlying cause of an internal failure is kept for logging only.
 *
 * # Error Categories
 *
 * ## Authentication Errors
 *
 * - `SignupFailed` - missing fields, malformed body, or an email already taken
 * - `NotLoggedIn` - unknown email, wrong password, or malformed body
 * - `Unauthorized` - missing, malformed, expired, or forged bearer token
 *
 * ## GraphQL Request Errors
 *
 * - `GraphQLRequest` - the request never reached the executor (no query,
 *   unparseable body). Reported in GraphQL's `{"errors": [...]}` shape.
 *
 * ## Internal Errors
 *
 * - `Internal` - hashing, token signing, or database failures
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Signup was rejected
    ///
    /// Deliberately carries no detail: a missing field and a duplicate email
    /// look the same to the client.
    #[error("signup rejected")]
    SignupFailed,

    /// Login was rejected
    ///
    /// Unknown accounts and wrong passwords are indistinguishable.
    #[error("login rejected")]
    NotLoggedIn,

    /// Request to a protected route without a valid bearer token
    #[error("unauthorized")]
    Unauthorized,

    /// GraphQL request that could not be turned into an operation
    #[error("bad GraphQL request: {0}")]
    GraphQLRequest(&'static str),

    /// Unexpected failure while serving a request
    #[error("internal error during {context}: {message}")]
    Internal {
        /// What the server was doing when it failed
        context: &'static str,
        /// Cause, for the logs
        message: String,
    },
}

impl BackendError {
    /// Create a new internal error
    ///
    /// # Arguments
    ///
    /// * `context` - What the server was doing, e.g. `"signup"`
    /// * `cause` - The underlying error
    pub fn internal(context: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            context,
            message: cause.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `SignupFailed` - 400 Bad Request
    /// - `NotLoggedIn` - 401 Unauthorized
    /// - `Unauthorized` - 401 Unauthorized
    /// - `GraphQLRequest` - 400 Bad Request
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SignupFailed => StatusCode::BAD_REQUEST,
            Self::NotLoggedIn => StatusCode::UNAUTHORIZED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::GraphQLRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
