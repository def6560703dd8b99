//! Authentication Module
//!
//! This module handles credential hashing and access-token issuance for
//! the Scene backend. The HTTP handlers that call into it live in the
//! embedding application; this crate only provides the primitives.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs         - Module exports and documentation
//! ├── credentials.rs - bcrypt password hashing and verification
//! ├── tokens.rs      - JWT access-token issuance
//! └── types.rs       - Signup/login request bodies
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: hash the password with [`hash_password`], store the
//!    hash, issue a token with [`TokenIssuer::issue`]
//! 2. **Login**: check the stored hash with [`verify_password`], issue a
//!    token on success
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage, salted per call
//! - Tokens are HS256-signed and expire after 7 days by default
//! - Token verification is the consuming service's job; this module
//!   only issues

/// bcrypt password hashing and verification
pub mod credentials;

/// JWT access-token issuance
pub mod tokens;

/// Signup and login request bodies
pub mod types;

// Re-export commonly used items
pub use credentials::{hash_password, verify_password, MAX_PASSWORD_BYTES};
pub use tokens::{Claims, TokenIssuer, DEFAULT_TOKEN_TTL_DAYS};
pub use types::{LoginRequest, SignupRequest};
