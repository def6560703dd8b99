/**
 * Authentication Request Types
 *
 * Request bodies the HTTP layer deserializes for the signup and login
 * endpoints. Passwords arrive in plaintext here and are hashed before
 * anything is stored.
 */

use serde::{Deserialize, Serialize};

/// Signup request
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Email address, unique per account
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}
