use std::io;
use thiserror::Error;

pub type HubResult<T> = Result<T, HubError>;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),

    #[error("malformed client event: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode server event: {0}")]
    Encode(#[source] serde_json::Error),
}
