use crate::room::{ChatHistoryStore, MembershipController};
use crate::signaling::SignalingOutput;
use pairhub_core::{ChatMessage, ClientEvent, ConnectionId, RoomId, ServerEvent};
use std::sync::Arc;
use tracing::debug;

/// Routes each inbound event to membership handling or to the right recipients.
///
/// Stateless apart from the shared room state it consults. Payloads are never
/// inspected; only the sender's id is attached where the event calls for it.
#[derive(Clone)]
pub struct RelayDispatcher {
    membership: MembershipController,
    chat: ChatHistoryStore,
    signaling: Arc<dyn SignalingOutput + Send + Sync>,
}

impl RelayDispatcher {
    pub fn new(signaling: Arc<dyn SignalingOutput + Send + Sync>) -> Self {
        let membership = MembershipController::new(signaling.clone());
        let chat = membership.chat_history();

        Self {
            membership,
            chat,
            signaling,
        }
    }

    pub fn membership(&self) -> &MembershipController {
        &self.membership
    }

    pub fn chat(&self) -> &ChatHistoryStore {
        &self.chat
    }

    pub async fn dispatch(&self, from: ConnectionId, event: ClientEvent) {
        debug!("{} -> {}", from, event.name());

        match event {
            ClientEvent::JoinRoom { room_id } => {
                self.membership.join(from, room_id).await;
            }
            ClientEvent::LeaveRoom { room_id } => {
                self.membership.leave(from, &room_id).await;
            }
            ClientEvent::GetExistingPeers { room_id } => {
                let peers = self.membership.existing_peers(&from, &room_id);
                self.signaling
                    .send(from, ServerEvent::ExistingPeers(peers))
                    .await;
            }
            ClientEvent::GetChatHistory { room_id } => {
                let history = self.chat.fetch(&room_id);
                self.signaling
                    .send(from, ServerEvent::ChatHistory(history))
                    .await;
            }
            ClientEvent::SendOffer { offer, to } => {
                self.relay_to(to, ServerEvent::ReceiveOffer { offer, from })
                    .await;
            }
            ClientEvent::SendAnswer { answer, to } => {
                self.relay_to(to, ServerEvent::ReceiveAnswer { answer, from })
                    .await;
            }
            ClientEvent::SendIceCandidate { candidate, to } => {
                self.relay_to(to, ServerEvent::ReceiveIceCandidate { candidate, from })
                    .await;
            }
            ClientEvent::CodeChange { room_id, code } => {
                self.broadcast(from, &room_id, ServerEvent::CodeChange { code })
                    .await;
            }
            ClientEvent::CursorChange {
                room_id,
                cursor_data,
            } => {
                let event = ServerEvent::CursorChange {
                    cursor_data,
                    socket_id: from,
                };
                self.broadcast(from, &room_id, event).await;
            }
            ClientEvent::LanguageChange { room_id, language } => {
                self.broadcast(from, &room_id, ServerEvent::GetLanguage { language })
                    .await;
            }
            ClientEvent::SendMessage { room_id, message } => {
                let message = ChatMessage::new(from, message.text);
                if !self.chat.append(&room_id, message.clone()) {
                    debug!("Chat for vanished room {} not stored", room_id);
                }
                self.broadcast(from, &room_id, ServerEvent::ReceiveMessage(message))
                    .await;
            }
        }
    }

    /// Transport reported the connection gone.
    pub async fn disconnect(&self, connection: ConnectionId) {
        self.membership.disconnect(connection).await;
    }

    // The target is trusted as given; it need not share a room with the sender.
    async fn relay_to(&self, to: ConnectionId, event: ServerEvent) {
        self.signaling.send(to, event).await;
    }

    async fn broadcast(&self, from: ConnectionId, room_id: &RoomId, event: ServerEvent) {
        let recipients = self.membership.existing_peers(&from, room_id);
        if recipients.is_empty() {
            return;
        }
        self.signaling.send_many(&recipients, event).await;
    }
}
