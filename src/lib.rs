//! Scene Backend Core
//!
//! Core library for the Scene chat and frame-upload backend. It provides
//! the building blocks an HTTP application layer composes at startup:
//! credential handling, access-token issuance, MongoDB connection
//! management, and the request/document shapes exchanged with clients.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`auth`** - Password hashing (bcrypt) and JWT issuance
//!   - Credential hashing and verification
//!   - HS256 access tokens with injected expiration
//!   - Signup/login request bodies
//!
//! - **`config`** - Environment-backed settings
//!   - One startup read of `JWT_SECRET`, `MONGO_URI`, `MONGO_DB_NAME`
//!
//! - **`db`** - MongoDB connection management
//!   - `DataStore` connection manager with explicit availability states
//!   - Persisted user and chat document shapes
//!
//! - **`models`** - Chat and frame-upload request bodies
//!
//! - **`error`** - Error types for the auth and data-store domains
//!
//! # Usage
//!
//! The embedding application owns the long-lived objects and passes them
//! to whoever needs them; nothing in this crate is a global.
//!
//! ```rust,no_run
//! use scene_backend::auth::TokenIssuer;
//! use scene_backend::db::DataStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let issuer = TokenIssuer::from_env()?;
//! let store = DataStore::from_env();
//! store.initialize().await;
//! # Ok(())
//! # }
//! ```

/// Password hashing, token issuance, and auth request types
pub mod auth;

/// Environment-backed settings
pub mod config;

/// MongoDB connection management and document shapes
pub mod db;

/// Error types
pub mod error;

/// Request bodies for chat creation and frame upload
pub mod models;

// Re-export the types most callers need
pub use auth::{TokenIssuer, hash_password, verify_password};
pub use config::Settings;
pub use db::DataStore;
pub use error::{AuthError, DataStoreError};
