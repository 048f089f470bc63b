use pairhub_core::{ClientEvent, ConnectionId, RoomId, ServerEvent};
use serde_json::json;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{join, leave};

#[tokio::test]
async fn test_code_change_skips_sender() {
    init_tracing();

    let (hub, signaling) = create_test_hub();
    let (a, b) = (ConnectionId::new(), ConnectionId::new());

    join(&hub, a, "room1").await;
    join(&hub, b, "room1").await;
    signaling.clear().await;

    hub.dispatch(
        a,
        ClientEvent::CodeChange {
            room_id: RoomId::from("room1"),
            code: "fn main() {}".to_string(),
        },
    )
    .await;

    assert_eq!(
        signaling.events_for(&b).await,
        vec![ServerEvent::CodeChange {
            code: "fn main() {}".to_string()
        }]
    );
    assert!(signaling.events_for(&a).await.is_empty());
}

#[tokio::test]
async fn test_cursor_change_carries_sender() {
    init_tracing();

    let (hub, signaling) = create_test_hub();
    let (a, b) = (ConnectionId::new(), ConnectionId::new());

    join(&hub, a, "room1").await;
    join(&hub, b, "room1").await;
    signaling.clear().await;

    let cursor = json!({ "lineNumber": 4, "column": 12 });
    hub.dispatch(
        b,
        ClientEvent::CursorChange {
            room_id: RoomId::from("room1"),
            cursor_data: cursor.clone(),
        },
    )
    .await;

    assert_eq!(
        signaling.events_for(&a).await,
        vec![ServerEvent::CursorChange {
            cursor_data: cursor,
            socket_id: b
        }]
    );
}

#[tokio::test]
async fn test_language_change_becomes_get_language() {
    init_tracing();

    let (hub, signaling) = create_test_hub();
    let (a, b) = (ConnectionId::new(), ConnectionId::new());

    join(&hub, a, "room1").await;
    join(&hub, b, "room1").await;
    signaling.clear().await;

    hub.dispatch(
        a,
        ClientEvent::LanguageChange {
            room_id: RoomId::from("room1"),
            language: "rust".to_string(),
        },
    )
    .await;

    assert_eq!(
        signaling.events_for(&b).await,
        vec![ServerEvent::GetLanguage {
            language: "rust".to_string()
        }]
    );
}

#[tokio::test]
async fn test_broadcast_uses_current_membership() {
    init_tracing();

    let (hub, signaling) = create_test_hub();
    let (a, b, c) = (ConnectionId::new(), ConnectionId::new(), ConnectionId::new());

    join(&hub, a, "room1").await;
    join(&hub, b, "room1").await;
    leave(&hub, b, "room1").await;
    join(&hub, c, "room1").await;
    signaling.clear().await;

    hub.dispatch(
        a,
        ClientEvent::CodeChange {
            room_id: RoomId::from("room1"),
            code: "x".to_string(),
        },
    )
    .await;

    let sent = signaling.all().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, c);
}

#[tokio::test]
async fn test_broadcast_to_unknown_room_goes_nowhere() {
    init_tracing();

    let (hub, signaling) = create_test_hub();

    hub.dispatch(
        ConnectionId::new(),
        ClientEvent::CodeChange {
            room_id: RoomId::from("ghost"),
            code: "x".to_string(),
        },
    )
    .await;

    assert!(signaling.all().await.is_empty());
    assert_eq!(hub.membership().room_count(), 0);
}
