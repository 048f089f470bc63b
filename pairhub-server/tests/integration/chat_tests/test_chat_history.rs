use pairhub_core::{ClientEvent, ConnectionId, RoomId, ServerEvent};

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{join, say};

#[tokio::test]
async fn test_message_is_stored_and_relayed() {
    init_tracing();

    let (hub, signaling) = create_test_hub();
    let (a, b) = (ConnectionId::new(), ConnectionId::new());
    let room = RoomId::from("room1");

    join(&hub, a, "room1").await;
    join(&hub, b, "room1").await;
    signaling.clear().await;

    say(&hub, b, "room1", "hi").await;

    let history = hub.chat().fetch(&room);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].sender_id, b);
    assert_eq!(history[0].text, "hi");

    assert_eq!(
        signaling.events_for(&a).await,
        vec![ServerEvent::ReceiveMessage(history[0].clone())]
    );
    assert!(signaling.events_for(&b).await.is_empty());
}

#[tokio::test]
async fn test_history_preserves_call_order() {
    init_tracing();

    let (hub, signaling) = create_test_hub();
    let (a, b) = (ConnectionId::new(), ConnectionId::new());

    join(&hub, a, "room1").await;
    join(&hub, b, "room1").await;

    for (i, sender) in [a, b, a, b, a].into_iter().enumerate() {
        say(&hub, sender, "room1", &format!("msg-{}", i)).await;
    }
    signaling.clear().await;

    hub.dispatch(
        a,
        ClientEvent::GetChatHistory {
            room_id: RoomId::from("room1"),
        },
    )
    .await;

    let events = signaling.events_for(&a).await;
    assert_eq!(events.len(), 1);
    let ServerEvent::ChatHistory(history) = &events[0] else {
        panic!("expected chat-history, got {:?}", events[0]);
    };

    let texts: Vec<_> = history.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["msg-0", "msg-1", "msg-2", "msg-3", "msg-4"]);
    assert_eq!(history[1].sender_id, b);
    assert!(signaling.events_for(&b).await.is_empty());
}

#[tokio::test]
async fn test_message_to_missing_room_is_dropped() {
    init_tracing();

    let (hub, signaling) = create_test_hub();
    let a = ConnectionId::new();
    let room = RoomId::from("ghost");

    say(&hub, a, "ghost", "anyone?").await;

    assert!(signaling.all().await.is_empty());
    assert!(hub.chat().fetch(&room).is_empty());
    assert!(!hub.membership().contains_room(&room));
}

#[tokio::test]
async fn test_history_is_scoped_per_room() {
    init_tracing();

    let (hub, _signaling) = create_test_hub();
    let (a, b) = (ConnectionId::new(), ConnectionId::new());

    join(&hub, a, "red").await;
    join(&hub, b, "blue").await;
    say(&hub, a, "red", "in red").await;
    say(&hub, b, "blue", "in blue").await;

    let red = hub.chat().fetch(&RoomId::from("red"));
    let blue = hub.chat().fetch(&RoomId::from("blue"));
    assert_eq!(red.len(), 1);
    assert_eq!(red[0].text, "in red");
    assert_eq!(blue.len(), 1);
    assert_eq!(blue[0].text, "in blue");
}
