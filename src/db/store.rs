/**
 * MongoDB Connection Manager
 *
 * This module provides the `DataStore` connection manager. It owns the
 * single shared MongoDB client and hands out typed collection handles.
 *
 * # States
 *
 * A store moves between three states:
 *
 * - **Uninitialized** - `initialize` has not been called
 * - **Ready** - connected and pinged; collection handles are available
 * - **Unavailable** - the last attempt failed; the recorded reason is
 *   reported by the accessors
 *
 * # Error Handling
 *
 * `initialize` never propagates connection errors. It logs them and
 * records the unavailable state, trading a crash at startup for
 * degraded operation. Callers asking for a collection get a
 * `DataStoreError` naming the cause and decide for themselves.
 */

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tokio::sync::RwLock;

use crate::config::Settings;
use crate::db::documents::{ChatDocument, UserDocument};
use crate::error::DataStoreError;

/// Bound on server selection when connecting and pinging
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Collection holding user accounts
const USERS_COLLECTION: &str = "Personal";

/// Collection holding chats and their frame metadata
const CHATS_COLLECTION: &str = "chats";

enum StoreState {
    Uninitialized,
    Ready(Database),
    Unavailable(String),
}

/// Connection manager for the Scene database
///
/// Owned by the application's composition root and shared by reference.
/// All collection handles come from the one client established by
/// `initialize`; there is no per-call connection setup.
pub struct DataStore {
    uri: Option<String>,
    db_name: String,
    state: RwLock<StoreState>,
}

impl DataStore {
    /// Create an unconnected store from settings
    ///
    /// No I/O happens here; call [`initialize`](Self::initialize) to
    /// connect.
    pub fn new(settings: &Settings) -> Self {
        Self {
            uri: settings.mongo_uri.clone(),
            db_name: settings.mongo_db_name.clone(),
            state: RwLock::new(StoreState::Uninitialized),
        }
    }

    /// Create an unconnected store from the process environment
    pub fn from_env() -> Self {
        Self::new(&Settings::from_env())
    }

    /// Connect to MongoDB and confirm reachability
    ///
    /// Parses the configured URI with a 5-second server selection
    /// timeout, builds the client, and pings the `admin` database. On
    /// success the store is Ready. On any failure (bad URI, DNS, auth,
    /// timeout) the error is logged and recorded; nothing is raised.
    /// Calling `initialize` again retries from scratch.
    ///
    /// Safe to call from concurrent tasks; state replacement is
    /// serialized behind the lock.
    pub async fn initialize(&self) {
        let Some(uri) = self.uri.as_deref() else {
            tracing::warn!("MONGO_URI not set, data store unavailable");
            let mut state = self.state.write().await;
            *state = StoreState::Unavailable("MONGO_URI is not configured".to_string());
            return;
        };

        tracing::info!("Connecting to MongoDB...");

        match connect(uri, &self.db_name).await {
            Ok(database) => {
                tracing::info!("Successfully connected to MongoDB database '{}'", self.db_name);
                let mut state = self.state.write().await;
                *state = StoreState::Ready(database);
            }
            Err(e) => {
                tracing::error!("Could not connect to MongoDB: {}", e);
                let mut state = self.state.write().await;
                *state = StoreState::Unavailable(e.to_string());
            }
        }
    }

    /// Get a typed handle to a named collection
    ///
    /// This is the single accessor every collection goes through; the
    /// handle is backed by the shared client.
    ///
    /// # Errors
    /// * `DataStoreError::NotInitialized` - `initialize` was never called
    /// * `DataStoreError::Unavailable` - the last attempt failed, with
    ///   the recorded reason
    pub async fn collection<T: Send + Sync>(
        &self,
        name: &str,
    ) -> Result<Collection<T>, DataStoreError> {
        match &*self.state.read().await {
            StoreState::Ready(database) => Ok(database.collection::<T>(name)),
            StoreState::Uninitialized => Err(DataStoreError::NotInitialized),
            StoreState::Unavailable(reason) => Err(DataStoreError::Unavailable {
                reason: reason.clone(),
            }),
        }
    }

    /// Handle to the user accounts collection
    pub async fn users(&self) -> Result<Collection<UserDocument>, DataStoreError> {
        self.collection(USERS_COLLECTION).await
    }

    /// Handle to the chats collection
    pub async fn chats(&self) -> Result<Collection<ChatDocument>, DataStoreError> {
        self.collection(CHATS_COLLECTION).await
    }
}

/// Open a client and confirm the server answers a ping
async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

    let client = Client::with_options(options)?;

    // The driver connects lazily; ping to surface unreachable endpoints now
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    Ok(client.database(db_name))
}
