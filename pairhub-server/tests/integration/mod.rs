pub mod chat_tests;
pub mod relay_tests;

use std::sync::Arc;
use tracing::Level;

use pairhub_server::RelayDispatcher;

use crate::utils::MockSignalingOutput;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_hub() -> (RelayDispatcher, MockSignalingOutput) {
    let signaling = MockSignalingOutput::new_stored_only();
    let dispatcher = RelayDispatcher::new(Arc::new(signaling.clone()));
    (dispatcher, signaling)
}
