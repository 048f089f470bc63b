mod chat;
mod connection;
mod protocol;
mod room;

pub use chat::{ChatMessage, ChatText};
pub use connection::ConnectionId;
pub use protocol::{ClientEvent, ServerEvent};
pub use room::RoomId;
