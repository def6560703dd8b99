//! Configuration Module
//!
//! This module handles the one startup read of the process environment.
//! The composition root builds a [`Settings`] value and hands it to the
//! services that need it; nothing else in the crate touches the
//! environment.
//!
//! # Configuration Sources
//!
//! Settings come from environment variables, with a `.env` file loaded
//! first when present:
//!
//! - `JWT_SECRET` - signing key for access tokens (required by
//!   `TokenIssuer::from_env`)
//! - `MONGO_URI` - MongoDB endpoint (required for the data store to
//!   reach Ready)
//! - `MONGO_DB_NAME` - database name, defaults to `"Scene"`
//!
//! # Error Handling
//!
//! Absent variables are not an error here. They stay `None` and each
//! service decides what that means: the token issuer fails fast, the
//! data store degrades.

/// Database name used when `MONGO_DB_NAME` is not set
pub const DEFAULT_DB_NAME: &str = "Scene";

/// Process-wide settings, read once from the environment at startup
#[derive(Debug, Clone)]
pub struct Settings {
    /// Secret key for signing access tokens (`JWT_SECRET`)
    pub jwt_secret: Option<String>,
    /// MongoDB endpoint (`MONGO_URI`)
    pub mongo_uri: Option<String>,
    /// Database name (`MONGO_DB_NAME`, falls back to `"Scene"`)
    pub mongo_db_name: String,
}

impl Settings {
    /// Read settings from the process environment
    ///
    /// Loads `.env` first if one is present. Empty values are treated
    /// the same as unset ones.
    pub fn from_env() -> Self {
        // Load environment variables from .env file if present
        dotenv::dotenv().ok();

        let jwt_secret = read_var("JWT_SECRET");
        let mongo_uri = read_var("MONGO_URI");
        if mongo_uri.is_none() {
            tracing::warn!("MONGO_URI not set. Database features will be disabled.");
        }

        let mongo_db_name =
            read_var("MONGO_DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        Self {
            jwt_secret,
            mongo_uri,
            mongo_db_name,
        }
    }
}

/// Read an environment variable, mapping absent and empty to `None`
fn read_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
