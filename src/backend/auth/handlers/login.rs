/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return the token
 *
 * # Security
 *
 * - Unknown email, wrong password, and malformed requests all produce the
 *   same 401 `{"message": "Not logged in"}` (no account enumeration)
 * - Password verification is constant-time (via bcrypt)
 * - Passwords and tokens are never logged
 */

use axum::{
    extract::{rejection::FormRejection, State},
    response::Json,
    Form,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{CredentialsForm, TokenResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(tokens)` - Token signing keys
/// * `form` - Form body, or the rejection if it could not be parsed
///
/// # Returns
///
/// `{"token": "<jwt>"}` on success
///
/// # Errors
///
/// * `401 {"message": "Not logged in"}` - unknown user, wrong password
///   (including one over 72 bytes), or missing fields
/// * `500 {"message": "Error"}` - database or token signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// email=user%40example.com&password=securepassword123
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(tokens): State<TokenKeys>,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Form(form) = form.map_err(|rejection| {
        tracing::warn!("Malformed login request: {}", rejection);
        BackendError::NotLoggedIn
    })?;

    let credentials = form.into_credentials().ok_or_else(|| {
        tracing::warn!("Login request with missing fields");
        BackendError::NotLoggedIn
    })?;

    tracing::info!("Login request for: {}", credentials.email);

    let user = get_user_by_email(&pool, &credentials.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", credentials.email);
            BackendError::NotLoggedIn
        })?;

    let valid = verify_password(&credentials.password, &user.password_hash)
        .await
        .map_err(|e| {
            if e.is_password_too_long() {
                tracing::warn!("Login password too long for user: {}", user.email);
                BackendError::NotLoggedIn
            } else {
                BackendError::from(e)
            }
        })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(BackendError::NotLoggedIn);
    }

    let token = tokens.issue(user.id, &user.email)?;

    tracing::info!("User logged in successfully: {} ({})", user.email, user.id);

    Ok(Json(TokenResponse { token }))
}
