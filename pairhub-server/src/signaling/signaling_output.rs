use async_trait::async_trait;
use pairhub_core::{ConnectionId, ServerEvent};

/// Outbound half of the transport: how the hub reaches a connection.
///
/// Delivery is best effort. Implementations must not block on the network and
/// must not report failures back to the caller.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Send one event to one connection.
    async fn send(&self, to: ConnectionId, event: ServerEvent);

    /// Send the same event to each of `recipients`.
    async fn send_many(&self, recipients: &[ConnectionId], event: ServerEvent) {
        for to in recipients {
            self.send(*to, event.clone()).await;
        }
    }
}
