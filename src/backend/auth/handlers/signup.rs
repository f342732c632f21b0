/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Parse the form body (`email`, `password`)
 * 2. Reject missing or blank fields
 * 3. Hash password using bcrypt (passwords over 72 bytes are rejected)
 * 4. Insert the user; the UNIQUE constraint rejects a taken email
 * 5. Return the "user created" message
 *
 * # Security
 *
 * - Every rejection returns the same body, so the response does not reveal
 *   whether an email is registered
 * - Passwords are hashed before storage and never logged
 */

use axum::{
    extract::{rejection::FormRejection, State},
    response::Json,
    Form,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{CredentialsForm, MessageResponse};
use crate::backend::auth::password::{hash_password, BcryptCost};
use crate::backend::auth::users::{create_user, UserError};
use crate::backend::error::BackendError;
use crate::shared::messages;

/// Sign up handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(cost)` - bcrypt work factor for the new hash
/// * `form` - Form body, or the rejection if it could not be parsed
///
/// # Returns
///
/// `{"message": "User created"}` on success
///
/// # Errors
///
/// * `400 {"message": "Error"}` - missing field, malformed body, password over
///   72 bytes, or email taken
/// * `500 {"message": "Error"}` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /auth/signup HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// email=user%40example.com&password=securepassword123
/// ```
pub async fn signup(
    State(pool): State<SqlitePool>,
    State(cost): State<BcryptCost>,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let Form(form) = form.map_err(|rejection| {
        tracing::warn!("Malformed signup request: {}", rejection);
        BackendError::SignupFailed
    })?;

    let credentials = form.into_credentials().ok_or_else(|| {
        tracing::warn!("Signup request with missing fields");
        BackendError::SignupFailed
    })?;

    tracing::info!("Signup request for email: {}", credentials.email);

    let password_hash = hash_password(&credentials.password, cost)
        .await
        .map_err(|e| {
            if e.is_password_too_long() {
                tracing::warn!("Signup password too long for: {}", credentials.email);
                BackendError::SignupFailed
            } else {
                BackendError::from(e)
            }
        })?;

    let user = create_user(&pool, &credentials.email, password_hash)
        .await
        .map_err(|e| {
            if let UserError::EmailTaken = e {
                tracing::warn!("Email already exists: {}", credentials.email);
            }
            BackendError::from(e)
        })?;

    tracing::info!("User created successfully: {} ({})", user.email, user.id);

    Ok(Json(MessageResponse::new(messages::USER_CREATED)))
}
