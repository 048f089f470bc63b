use crate::error::HubError;
use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use pairhub_core::{ConnectionId, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

struct SignalingInner {
    peers: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Outbound queues of every live WebSocket connection.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                peers: DashMap::new(),
            }),
        }
    }

    pub fn add_peer(&self, connection: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.peers.insert(connection, tx);
    }

    pub fn remove_peer(&self, connection: &ConnectionId) {
        self.inner.peers.remove(connection);
    }

    pub fn connection_count(&self) -> usize {
        self.inner.peers.len()
    }

    pub fn send_signal(&self, connection: ConnectionId, event: &ServerEvent) {
        let json = match serde_json::to_string(event).map_err(HubError::Encode) {
            Ok(json) => json,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

        let Some(peer) = self.inner.peers.get(&connection) else {
            warn!(
                "Attempted to send signal to disconnected connection {}",
                connection
            );
            return;
        };

        if peer.send(Message::Text(json.into())).is_err() {
            debug!("Outbound queue of {} already closed", connection);
        }
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send(&self, to: ConnectionId, event: ServerEvent) {
        self.send_signal(to, &event);
    }
}
