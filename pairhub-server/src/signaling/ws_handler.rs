use crate::AppState;
use crate::error::HubError;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use pairhub_core::{ClientEvent, ConnectionId, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.max_message_size(state.config.max_frame_bytes)
        .on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection = ConnectionId::new();
    info!("New socket connected: {}", connection);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.signaling.add_peer(connection, tx);
    state.signaling.send_signal(
        connection,
        &ServerEvent::Connected {
            socket_id: connection,
        },
    );

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let state = state.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match decode(&text) {
                        Ok(event) => state.dispatcher.dispatch(connection, event).await,
                        Err(e) => warn!("Dropping frame from {}: {}", connection, e),
                    },
                    Message::Close(_) => break,
                    _ => debug!("Ignoring non-text frame from {}", connection),
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => stop_task(recv_task).await,
        _ = (&mut recv_task) => send_task.abort(),
    };

    // The reader is gone by now, so no dispatch can re-seat the connection.
    state.dispatcher.disconnect(connection).await;
    state.signaling.remove_peer(&connection);
    info!("User disconnected: {}", connection);
}

/// Aborts the task and waits until it has actually stopped.
async fn stop_task(task: JoinHandle<()>) {
    task.abort();
    let _ = task.await;
}

fn decode(text: &str) -> Result<ClientEvent, HubError> {
    serde_json::from_str(text).map_err(HubError::Decode)
}
