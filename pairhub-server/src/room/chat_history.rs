use crate::room::RoomTable;
use pairhub_core::{ChatMessage, RoomId};
use std::sync::Arc;

/// Append-only chat log of a single room, in arrival order.
#[derive(Debug, Default, Clone)]
pub(crate) struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

/// Per-room chat logs, living exactly as long as their rooms.
#[derive(Clone)]
pub struct ChatHistoryStore {
    rooms: Arc<RoomTable>,
}

impl ChatHistoryStore {
    pub(crate) fn new(rooms: Arc<RoomTable>) -> Self {
        Self { rooms }
    }

    /// Returns `false` when the room is gone; the message is dropped.
    pub fn append(&self, room_id: &RoomId, message: ChatMessage) -> bool {
        self.rooms.append_chat(room_id, message)
    }

    pub fn fetch(&self, room_id: &RoomId) -> Vec<ChatMessage> {
        self.rooms.chat_history(room_id)
    }
}
