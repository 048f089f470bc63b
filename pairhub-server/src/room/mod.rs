mod chat_history;
mod connection_registry;
mod membership;
mod room_table;

pub use chat_history::ChatHistoryStore;
pub use membership::*;

pub(crate) use chat_history::ChatHistory;
pub(crate) use connection_registry::ConnectionRegistry;
pub(crate) use room_table::{Admission, RoomTable};
