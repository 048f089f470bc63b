use crate::room::{ChatHistory, ConnectionRegistry};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use pairhub_core::{ChatMessage, ConnectionId, RoomId};
use tracing::info;

pub(crate) const ROOM_CAPACITY: usize = 2;

/// Members in join order plus the room's chat log.
#[derive(Debug, Default)]
pub(crate) struct Room {
    members: heapless::Vec<ConnectionId, ROOM_CAPACITY>,
    history: ChatHistory,
}

impl Room {
    pub fn contains(&self, connection: &ConnectionId) -> bool {
        self.members.contains(connection)
    }

    /// First member other than `connection`, in join order.
    fn peer_of(&self, connection: &ConnectionId) -> Option<ConnectionId> {
        self.members.iter().find(|id| *id != connection).copied()
    }
}

/// Result of an admission attempt, decided under the room's guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    Full,
    Admitted {
        /// Member that was already present before this join.
        peer: Option<ConnectionId>,
        /// `false` for a re-join by an existing member.
        newly_added: bool,
    },
}

/// Result of a removal, decided under the room's guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Removal {
    pub was_member: bool,
    pub remaining: Vec<ConnectionId>,
}

/// Room key to [`Room`].
///
/// Every mutation runs inside the dashmap entry guard for its key, which is the
/// per-room critical section. The connection registry is updated inside the same
/// guard. Lock order is always room shard first, registry shard second.
#[derive(Default)]
pub(crate) struct RoomTable {
    rooms: DashMap<RoomId, Room>,
}

impl RoomTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(
        &self,
        connection: ConnectionId,
        room_id: &RoomId,
        registry: &ConnectionRegistry,
    ) -> Admission {
        let mut room = self.rooms.entry(room_id.clone()).or_insert_with(|| {
            info!("Creating new room: {}", room_id);
            Room::default()
        });

        let peer = room.peer_of(&connection);

        if room.contains(&connection) {
            return Admission::Admitted {
                peer,
                newly_added: false,
            };
        }

        if room.members.push(connection).is_err() {
            return Admission::Full;
        }
        registry.bind(connection, room_id.clone());

        Admission::Admitted {
            peer,
            newly_added: true,
        }
    }

    /// Removes `connection` from the room and deletes the room, history included,
    /// if that left it empty. Returns `None` if the room does not exist.
    pub fn remove(
        &self,
        connection: &ConnectionId,
        room_id: &RoomId,
        registry: &ConnectionRegistry,
    ) -> Option<Removal> {
        let Entry::Occupied(mut entry) = self.rooms.entry(room_id.clone()) else {
            registry.unbind(connection, room_id);
            return None;
        };

        let room = entry.get_mut();
        let was_member = room.contains(connection);
        room.members.retain(|id| id != connection);
        registry.unbind(connection, room_id);

        let remaining = room.members.to_vec();
        if remaining.is_empty() {
            let room = entry.remove();
            info!(
                "Room {} deleted ({} chat messages discarded)",
                room_id,
                room.history.len()
            );
        }

        Some(Removal {
            was_member,
            remaining,
        })
    }

    pub fn members(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        self.rooms
            .get(room_id)
            .map(|room| room.members.to_vec())
            .unwrap_or_default()
    }

    pub fn append_chat(&self, room_id: &RoomId, message: ChatMessage) -> bool {
        let Some(mut room) = self.rooms.get_mut(room_id) else {
            return false;
        };
        room.history.push(message);
        true
    }

    pub fn chat_history(&self, room_id: &RoomId) -> Vec<ChatMessage> {
        self.rooms
            .get(room_id)
            .map(|room| room.history.messages().to_vec())
            .unwrap_or_default()
    }

    pub fn contains_room(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }
}
