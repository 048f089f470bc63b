use crate::config::HubConfig;
use crate::error::{HubError, HubResult};
use crate::relay::RelayDispatcher;
use crate::signaling::{SignalingService, ws_handler};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Process-wide hub state, created once per server and dropped at shutdown.
pub struct AppState {
    pub config: HubConfig,
    pub signaling: SignalingService,
    pub dispatcher: RelayDispatcher,
}

impl AppState {
    pub fn new(config: HubConfig) -> Self {
        let signaling = SignalingService::new();
        let dispatcher = RelayDispatcher::new(Arc::new(signaling.clone()));

        Self {
            config,
            signaling,
            dispatcher,
        }
    }
}

#[derive(Debug, Serialize)]
struct Health {
    rooms: usize,
    connections: usize,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        rooms: state.dispatcher.membership().room_count(),
        connections: state.signaling.connection_count(),
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(ws_handler))
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn serve<F>(config: HubConfig, shutdown: F) -> HubResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await.map_err(|source| HubError::Bind {
        addr: addr.to_string(),
        source,
    })?;

    serve_on(listener, Arc::new(AppState::new(config)), shutdown).await
}

pub async fn serve_on<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> HubResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Signaling hub listening on ws://{}", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(HubError::Serve)?;

    info!("Signaling hub stopped");
    Ok(())
}
