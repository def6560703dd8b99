/**
 * Password Hashing
 *
 * bcrypt-backed hashing and verification for user credentials.
 *
 * # Security
 *
 * - Hashes are salted per call, so the same password never hashes to
 *   the same string twice
 * - Verification runs through bcrypt's own constant-time comparison
 * - A malformed stored hash verifies as `false` rather than surfacing
 *   an error, so login responses cannot leak which failure occurred
 *
 * bcrypt reads at most 72 bytes of input. Longer passwords are rejected
 * up front instead of being silently truncated.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::AuthError;

/// bcrypt's input ceiling; longer passwords are rejected
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a password for storage
///
/// # Arguments
/// * `password` - Plaintext password, at most 72 bytes
///
/// # Returns
/// Salted bcrypt hash string, or an error
///
/// # Errors
/// * `AuthError::PasswordTooLong` - input exceeds 72 bytes
/// * `AuthError::Hashing` - bcrypt failed
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AuthError::PasswordTooLong {
            len: password.len(),
        });
    }

    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a stored bcrypt hash
///
/// Returns `false` for a wrong password and for any malformed stored
/// hash. Never fails.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    verify(password, hashed).unwrap_or(false)
}
