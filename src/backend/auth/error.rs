//! Credential processing errors
//!
//! Failures while hashing or verifying passwords and while signing or
//! verifying tokens.

use thiserror::Error;

/// Errors raised by password hashing and token handling
#[derive(Debug, Error)]
pub enum AuthError {
    /// bcrypt failed to hash or parse a hash
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token could not be signed, or failed verification
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password longer than bcrypt can hash without truncating it
    #[error("password is {length} bytes; at most {maximum} are accepted")]
    PasswordTooLong { length: usize, maximum: usize },

    /// Token `sub` claim is not a user id
    #[error("token subject is not a user id: {0}")]
    InvalidSubject(String),

    /// Blocking hash task was cancelled or panicked
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AuthError {
    /// True when the password itself was refused, before any hashing.
    pub fn is_password_too_long(&self) -> bool {
        matches!(self, Self::PasswordTooLong { .. })
    }

    /// True when a token was rejected because its `exp` has passed.
    pub fn is_expired(&self) -> bool {
        matches!(
            self,
            Self::Token(e) if matches!(e.kind(), jsonwebtoken::errors::ErrorKind::ExpiredSignature)
        )
    }
}
