//! Keep-alive pings for timetable clients that sit idle between updates.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ws::manager::WsManager;

/// Ping every registered connection each `period`.
///
/// Clients only receive a frame when a lesson table changes, which can be
/// hours apart; the pings stop proxies from reaping those sockets. Ticks
/// with no connections are skipped. Abort the handle on shutdown.
pub fn start_heartbeat(ws_manager: Arc<WsManager>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick fires immediately; nobody is connected yet.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let pinged = ws_manager.ping_all().await;
            if pinged > 0 {
                tracing::trace!(pinged, "Heartbeat");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use axum::extract::ws::Message;

    use super::*;

    #[tokio::test]
    async fn pings_registered_clients_every_period() {
        let manager = Arc::new(WsManager::new());
        let mut rx = manager.add("conn-1".to_string()).await;

        let handle = start_heartbeat(Arc::clone(&manager), Duration::from_millis(20));

        for _ in 0..2 {
            let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("ping within the period")
                .expect("channel open");
            assert!(matches!(msg, Message::Ping(_)));
        }

        handle.abort();
    }
}
