use crate::model::chat::{ChatMessage, ChatText};
use crate::model::connection::ConnectionId;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events a client sends to the hub.
///
/// Framed as `{"event": "join-room", "data": {"roomId": "..."}}`.
/// Signaling payloads and cursor data are opaque and relayed untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    JoinRoom {
        room_id: RoomId,
    },
    LeaveRoom {
        room_id: RoomId,
    },
    GetExistingPeers {
        room_id: RoomId,
    },
    GetChatHistory {
        room_id: RoomId,
    },
    SendOffer {
        offer: Value,
        to: ConnectionId,
    },
    SendAnswer {
        answer: Value,
        to: ConnectionId,
    },
    SendIceCandidate {
        candidate: Value,
        to: ConnectionId,
    },
    CodeChange {
        room_id: RoomId,
        code: String,
    },
    CursorChange {
        room_id: RoomId,
        cursor_data: Value,
    },
    LanguageChange {
        room_id: RoomId,
        language: String,
    },
    SendMessage {
        room_id: RoomId,
        message: ChatText,
    },
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::JoinRoom { .. } => "join-room",
            Self::LeaveRoom { .. } => "leave-room",
            Self::GetExistingPeers { .. } => "get-existing-peers",
            Self::GetChatHistory { .. } => "get-chat-history",
            Self::SendOffer { .. } => "send-offer",
            Self::SendAnswer { .. } => "send-answer",
            Self::SendIceCandidate { .. } => "send-ice-candidate",
            Self::CodeChange { .. } => "code-change",
            Self::CursorChange { .. } => "cursor-change",
            Self::LanguageChange { .. } => "language-change",
            Self::SendMessage { .. } => "send-message",
        }
    }
}

/// Events the hub sends to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    /// First frame on every connection: the id the hub assigned to it.
    Connected {
        socket_id: ConnectionId,
    },
    RoomFull,
    UserJoined {
        socket_id: ConnectionId,
    },
    UserLeft {
        socket_id: ConnectionId,
    },
    ExistingPeers(Vec<ConnectionId>),
    ChatHistory(Vec<ChatMessage>),
    ReceiveOffer {
        offer: Value,
        from: ConnectionId,
    },
    ReceiveAnswer {
        answer: Value,
        from: ConnectionId,
    },
    ReceiveIceCandidate {
        candidate: Value,
        from: ConnectionId,
    },
    CodeChange {
        code: String,
    },
    CursorChange {
        cursor_data: Value,
        socket_id: ConnectionId,
    },
    GetLanguage {
        language: String,
    },
    ReceiveMessage(ChatMessage),
}
