/**
 * Persisted Document Shapes
 *
 * BSON document structures stored in the "Personal" (users) and "chats"
 * collections.
 */

use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::FrameMetadata;

/// User account document in the `Personal` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    /// MongoDB document id, absent until inserted
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Display name
    pub name: String,
    /// Email address, unique per account
    pub email: String,
    /// bcrypt hash of the password, never the plaintext
    pub password: String,
}

impl UserDocument {
    /// Build a document for a new account from an already-hashed password
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password: password_hash,
        }
    }
}

/// Chat document in the `chats` collection
///
/// A chat belongs to one user and accumulates frame metadata as the
/// client uploads frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatDocument {
    /// Owning user's document id
    pub user_id: ObjectId,
    /// Chat id handed to clients, a v4 UUID string
    pub chat_id: String,
    /// Display name of the chat
    pub chat_name: String,
    /// Uploaded frame metadata, in upload order
    pub frames: Vec<FrameMetadata>,
    /// Creation time (UTC)
    pub created_at: DateTime,
}

impl ChatDocument {
    /// Build a new, empty chat for a user
    ///
    /// Generates the client-facing chat id and stamps the creation time.
    pub fn new(user_id: ObjectId, chat_name: impl Into<String>) -> Self {
        Self {
            user_id,
            chat_id: Uuid::new_v4().to_string(),
            chat_name: chat_name.into(),
            frames: Vec::new(),
            created_at: DateTime::now(),
        }
    }
}
