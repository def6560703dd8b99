/**
 * Error Types
 *
 * Error definitions for credential handling, token issuance, and the
 * MongoDB connection manager.
 */

use thiserror::Error;

/// Errors from password hashing and token issuance
#[derive(Debug, Error)]
pub enum AuthError {
    /// `JWT_SECRET` was unset or empty when the token issuer was built.
    ///
    /// There is no fallback secret. An unconfigured issuer must fail
    /// loudly instead of signing tokens with an empty key.
    #[error("JWT_SECRET is not configured")]
    MissingSecret,

    /// The claim set could not be serialized or signed
    #[error("failed to encode token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    /// Password exceeds bcrypt's 72-byte input limit
    #[error("password is {len} bytes, bcrypt accepts at most 72")]
    PasswordTooLong {
        /// Byte length of the rejected password
        len: usize,
    },

    /// bcrypt failed while hashing
    #[error("failed to hash password: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

/// Why a collection handle is not available
///
/// Returned by the `DataStore` accessors so callers can branch on cause:
/// the store was never initialized, or the last initialization attempt
/// failed and the store is sitting in its unavailable state.
#[derive(Debug, Error)]
pub enum DataStoreError {
    /// `initialize` has not been called on this store
    #[error("data store has not been initialized")]
    NotInitialized,

    /// The last initialization attempt failed
    #[error("data store is unavailable: {reason}")]
    Unavailable {
        /// Connection error recorded by the failed attempt
        reason: String,
    },
}
