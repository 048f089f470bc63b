use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One entry of a room's chat log. Immutable once stamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender_id: ConnectionId,
    pub text: String,
    /// Milliseconds since the Unix epoch, taken when the hub received the message.
    pub timestamp: u64,
}

impl ChatMessage {
    pub fn new(sender_id: ConnectionId, text: impl Into<String>) -> Self {
        Self::at(sender_id, text, unix_millis())
    }

    pub fn at(sender_id: ConnectionId, text: impl Into<String>, timestamp: u64) -> Self {
        Self {
            sender_id,
            text: text.into(),
            timestamp,
        }
    }
}

/// Body of an inbound `send-message` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatText {
    pub text: String,
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
