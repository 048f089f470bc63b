use dashmap::DashMap;
use pairhub_core::{ConnectionId, RoomId};

/// Back-reference from a live connection to the room it currently occupies.
///
/// Only the room table writes here, and only while it holds the guard of the
/// room being changed, so an entry never outlives the membership it mirrors.
#[derive(Default)]
pub(crate) struct ConnectionRegistry {
    index: DashMap<ConnectionId, RoomId>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_of(&self, connection: &ConnectionId) -> Option<RoomId> {
        self.index.get(connection).map(|entry| entry.value().clone())
    }

    pub(crate) fn bind(&self, connection: ConnectionId, room_id: RoomId) {
        self.index.insert(connection, room_id);
    }

    /// Drops the mapping only if it still points at `room_id`.
    pub(crate) fn unbind(&self, connection: &ConnectionId, room_id: &RoomId) {
        self.index.remove_if(connection, |_, current| current == room_id);
    }
}
