use crate::error::{HubError, HubResult};
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_FRAME_BYTES: usize = 64 * 1024;

/// Listener settings for the hub.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on a single inbound WebSocket message.
    pub max_frame_bytes: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
        }
    }
}

impl HubConfig {
    pub fn socket_addr(&self) -> HubResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| HubError::InvalidAddress(raw))
    }
}
