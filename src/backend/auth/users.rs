/**
 * User Model and Database Operations
 *
 * This module handles user records and their persistence. Email uniqueness
 * is enforced by the `UNIQUE` constraint on `users.email`; a violation on
 * insert surfaces as `UserError::EmailTaken`.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (normalized, unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Errors from user persistence
#[derive(Debug, Error)]
pub enum UserError {
    /// Another account already uses this email
    #[error("email already registered")]
    EmailTaken,

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Canonical form of an email for storage and lookup
///
/// Surrounding whitespace is dropped and ASCII letters are lowercased, so
/// `User@Example.com ` and `user@example.com` name the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email (stored normalized)
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user, or `UserError::EmailTaken` if the email is registered
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: String,
) -> Result<User, UserError> {
    let user = User {
        id: Uuid::new_v4(),
        email: normalize_email(email),
        password_hash,
        created_at: Utc::now(),
    };

    let result = sqlx::query(
        r#"
        INSERT INTO users (id, email, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(user),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(UserError::EmailTaken)
        }
        Err(e) => Err(UserError::Database(e)),
    }
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email (normalized before lookup)
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, UserError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(normalize_email(email))
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - User ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, UserError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
