use crate::room::{Admission, ChatHistoryStore, ConnectionRegistry, RoomTable};
use crate::signaling::SignalingOutput;
use pairhub_core::{ConnectionId, RoomId, ServerEvent};
use std::sync::Arc;
use tracing::{info, warn};

/// What a `join-room` request ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    RoomFull,
    Joined { peer: Option<ConnectionId> },
    AlreadyMember { peer: Option<ConnectionId> },
}

/// Join, leave and disconnect transitions for two-seat rooms.
///
/// State changes happen under the room's guard in [`RoomTable`]; notifications
/// go out only after that guard is released.
#[derive(Clone)]
pub struct MembershipController {
    rooms: Arc<RoomTable>,
    registry: Arc<ConnectionRegistry>,
    signaling: Arc<dyn SignalingOutput + Send + Sync>,
}

impl MembershipController {
    pub fn new(signaling: Arc<dyn SignalingOutput + Send + Sync>) -> Self {
        Self {
            rooms: Arc::new(RoomTable::new()),
            registry: Arc::new(ConnectionRegistry::new()),
            signaling,
        }
    }

    /// Chat store sharing this controller's room table.
    pub fn chat_history(&self) -> ChatHistoryStore {
        ChatHistoryStore::new(self.rooms.clone())
    }

    pub async fn join(&self, connection: ConnectionId, room_id: RoomId) -> JoinOutcome {
        // A connection sits in one room at a time.
        if let Some(previous) = self.registry.room_of(&connection) {
            if previous != room_id {
                info!(
                    "{} switches from room {} to room {}",
                    connection, previous, room_id
                );
                self.leave(connection, &previous).await;
            }
        }

        let outcome = match self.rooms.admit(connection, &room_id, &self.registry) {
            Admission::Full => JoinOutcome::RoomFull,
            Admission::Admitted {
                peer,
                newly_added: true,
            } => JoinOutcome::Joined { peer },
            Admission::Admitted {
                peer,
                newly_added: false,
            } => JoinOutcome::AlreadyMember { peer },
        };

        match outcome {
            JoinOutcome::RoomFull => {
                warn!("{} rejected: room {} is full", connection, room_id);
                self.signaling.send(connection, ServerEvent::RoomFull).await;
            }
            JoinOutcome::Joined { peer } | JoinOutcome::AlreadyMember { peer } => {
                info!("{} joined room {}", connection, room_id);
                if let Some(peer) = peer {
                    info!("Sent user-joined to {} to connect with {}", connection, peer);
                    self.signaling
                        .send(connection, ServerEvent::UserJoined { socket_id: peer })
                        .await;
                }
            }
        }

        outcome
    }

    /// Returns `true` if the connection was a member of the room.
    pub async fn leave(&self, connection: ConnectionId, room_id: &RoomId) -> bool {
        let Some(removal) = self.rooms.remove(&connection, room_id, &self.registry) else {
            return false;
        };
        if !removal.was_member {
            return false;
        }

        info!("{} left room {}", connection, room_id);
        self.signaling
            .send_many(
                &removal.remaining,
                ServerEvent::UserLeft {
                    socket_id: connection,
                },
            )
            .await;

        true
    }

    /// Leaves whatever room the connection occupies.
    pub async fn disconnect(&self, connection: ConnectionId) {
        match self.registry.room_of(&connection) {
            Some(room_id) => {
                self.leave(connection, &room_id).await;
            }
            None => info!("{} disconnected outside any room", connection),
        }
    }

    /// Members of the room other than `connection`.
    pub fn existing_peers(
        &self,
        connection: &ConnectionId,
        room_id: &RoomId,
    ) -> Vec<ConnectionId> {
        self.rooms
            .members(room_id)
            .into_iter()
            .filter(|id| id != connection)
            .collect()
    }

    pub fn members(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        self.rooms.members(room_id)
    }

    pub fn room_of(&self, connection: &ConnectionId) -> Option<RoomId> {
        self.registry.room_of(connection)
    }

    pub fn contains_room(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_room(room_id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
