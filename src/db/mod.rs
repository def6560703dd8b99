//! Database Module
//!
//! This module manages the MongoDB connection for the Scene backend and
//! defines the document shapes it persists.
//!
//! # Module Structure
//!
//! ```text
//! db/
//! ├── mod.rs       - Module exports and documentation
//! ├── store.rs     - DataStore connection manager
//! └── documents.rs - Persisted user and chat documents
//! ```
//!
//! # Connection Lifecycle
//!
//! The application's composition root owns a single [`DataStore`] and
//! passes it by reference to whoever needs a collection handle. The
//! store starts uninitialized, connects once on `initialize`, and every
//! collection handle afterwards comes from that one shared client.
//!
//! A failed connection attempt does not abort startup. The store records
//! the failure and its accessors report it, so the rest of the
//! application keeps running with database features unavailable.

/// Persisted document shapes
pub mod documents;

/// Connection manager
pub mod store;

// Re-export commonly used types
pub use documents::{ChatDocument, UserDocument};
pub use store::DataStore;
