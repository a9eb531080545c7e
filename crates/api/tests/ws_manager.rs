//! Unit tests for `WsManager`.
//!
//! These tests exercise the WebSocket connection manager directly, without
//! performing any HTTP upgrades.

use axum::extract::ws::Message;
use timetable_api::ws::WsManager;

#[tokio::test]
async fn new_manager_has_zero_connections() {
    let manager = WsManager::new();
    assert_eq!(manager.connection_count().await, 0);
}

#[tokio::test]
async fn add_and_remove_track_connection_count() {
    let manager = WsManager::new();

    let before = chrono::Utc::now();
    let _rx = manager.add("conn-1".to_string()).await;
    assert_eq!(manager.connection_count().await, 1);

    let connected_at = manager.remove("conn-1").await.expect("was registered");
    assert!(connected_at >= before);
    assert_eq!(manager.connection_count().await, 0);
    assert!(manager.remove("conn-1").await.is_none());
}

#[tokio::test]
async fn remove_unknown_id_is_noop() {
    let manager = WsManager::new();

    let _rx = manager.add("conn-1".to_string()).await;
    assert!(manager.remove("nonexistent").await.is_none());

    assert_eq!(manager.connection_count().await, 1);
}

#[tokio::test]
async fn shutdown_all_sends_close_and_clears() {
    let manager = WsManager::new();

    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;

    manager.shutdown_all().await;

    assert_eq!(manager.connection_count().await, 0);

    for rx in [&mut rx1, &mut rx2] {
        let msg = rx.recv().await.expect("should receive Close");
        assert!(
            matches!(msg, Message::Close(None)),
            "Expected Close(None), got: {msg:?}"
        );
        // Sender was dropped with the map entry.
        assert!(rx.recv().await.is_none(), "Channel should be closed");
    }
}

#[tokio::test]
async fn broadcast_sends_to_all_connections() {
    let manager = WsManager::new();

    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;
    let mut rx3 = manager.add("conn-3".to_string()).await;

    let delivered = manager.broadcast(Message::Text("hello everyone".into())).await;
    assert_eq!(delivered, 3);

    for rx in [&mut rx1, &mut rx2, &mut rx3] {
        let msg = rx.recv().await.expect("should receive broadcast");
        assert!(matches!(&msg, Message::Text(t) if t.as_str() == "hello everyone"));
    }
}

#[tokio::test]
async fn broadcast_skips_closed_channels() {
    let manager = WsManager::new();

    let rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;
    drop(rx1);

    let delivered = manager.broadcast(Message::Text("still alive".into())).await;
    assert_eq!(delivered, 1);

    let msg = rx2.recv().await.expect("rx2 should receive broadcast");
    assert!(matches!(&msg, Message::Text(t) if t.as_str() == "still alive"));
}

#[tokio::test]
async fn ping_all_sends_ping_frames() {
    let manager = WsManager::new();
    let mut rx = manager.add("conn-1".to_string()).await;

    assert_eq!(manager.ping_all().await, 1);

    let msg = rx.recv().await.expect("should receive Ping");
    assert!(matches!(msg, Message::Ping(_)));
}

#[tokio::test]
async fn duplicate_id_replaces_previous_connection() {
    let manager = WsManager::new();

    let mut rx_old = manager.add("conn-1".to_string()).await;
    let mut rx_new = manager.add("conn-1".to_string()).await;
    assert_eq!(manager.connection_count().await, 1);

    manager.broadcast(Message::Text("replaced".into())).await;

    let msg = rx_new.recv().await.expect("New rx should receive message");
    assert!(matches!(&msg, Message::Text(t) if t.as_str() == "replaced"));
    // The old sender was dropped when replaced.
    assert!(rx_old.recv().await.is_none());
}
