//! Request Models
//!
//! Request bodies the HTTP layer deserializes for chat creation and
//! frame upload. These are passive value objects; the handlers that
//! interpret them live in the embedding application.

use serde::{Deserialize, Serialize};

fn default_chat_name() -> String {
    "New Chat".to_string()
}

/// Request to create a new chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatRequest {
    /// Owning user's id (MongoDB ObjectId in string form)
    pub user_id: String,
    /// Chat display name, "New Chat" when omitted
    #[serde(default = "default_chat_name")]
    pub chat_name: String,
}

/// Metadata for a single uploaded frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameMetadata {
    /// Position of the frame in the client's sequence
    pub frame_index: i64,
    /// Capture time in seconds, if the client provides one
    #[serde(default)]
    pub timestamp: Option<f64>,
}

/// Request to attach uploaded frames to a chat
///
/// Frames arrive in client order. Nothing here requires the indices to
/// be unique or sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFramesRequest {
    /// Owning user's id
    pub user_id: String,
    /// Target chat id (v4 UUID string)
    pub chat_id: String,
    /// Frame metadata, in upload order
    pub frames: Vec<FrameMetadata>,
}
