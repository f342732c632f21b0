/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both run on tokio's blocking pool since a
 * single bcrypt round at the default cost takes hundreds of milliseconds.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * rejected outright instead of being silently cut, so two passwords sharing
 * a 72-byte prefix never match each other.
 */

use bcrypt::{non_truncating_hash, non_truncating_verify};

use crate::backend::auth::error::AuthError;

/// bcrypt work factor applied to new hashes
///
/// Existing hashes carry their own cost, so verification ignores this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptCost(pub u32);

impl Default for BcryptCost {
    fn default() -> Self {
        Self(bcrypt::DEFAULT_COST)
    }
}

/// Longest password bcrypt hashes without truncation, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

fn check_length(password: &str) -> Result<(), AuthError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AuthError::PasswordTooLong {
            length: password.len(),
            maximum: MAX_PASSWORD_BYTES,
        });
    }
    Ok(())
}

/// Hash a password with the given bcrypt cost
///
/// # Arguments
/// * `password` - Plain-text password
/// * `cost` - bcrypt work factor
///
/// # Returns
/// The encoded bcrypt hash, salt included, or `AuthError::PasswordTooLong`
/// for passwords over `MAX_PASSWORD_BYTES`
pub async fn hash_password(password: &str, cost: BcryptCost) -> Result<String, AuthError> {
    check_length(password)?;
    let password = password.to_owned();
    let hashed =
        tokio::task::spawn_blocking(move || non_truncating_hash(password, cost.0)).await??;
    Ok(hashed)
}

/// Check a password against a stored bcrypt hash
///
/// # Returns
/// `Ok(false)` on mismatch; `AuthError::PasswordTooLong` for a password no
/// stored hash can match; any other `Err` when the stored hash is unreadable
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    check_length(password)?;
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    let valid =
        tokio::task::spawn_blocking(move || non_truncating_verify(password, &password_hash))
            .await??;
    Ok(valid)
}
