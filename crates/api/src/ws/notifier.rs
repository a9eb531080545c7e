//! [`UpdateNotifier`] backed by the WebSocket connection registry.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::ws::Message;
use timetable_core::error::CoreError;
use timetable_core::lesson_table_service::UpdateNotifier;

use crate::ws::manager::WsManager;

/// Text frame pushed to clients when lesson tables change. Carries no data;
/// clients re-fetch what they display.
pub const UPDATE_FRAME: &str = r#"{"type":"update"}"#;

/// Build the update frame.
pub fn update_message() -> Message {
    Message::Text(UPDATE_FRAME.into())
}

/// Broadcasts [`UPDATE_FRAME`] to every open WebSocket connection.
pub struct WsUpdateNotifier {
    ws_manager: Arc<WsManager>,
}

impl WsUpdateNotifier {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }
}

#[async_trait]
impl UpdateNotifier for WsUpdateNotifier {
    async fn notify_all_clients_about_update(&self) -> Result<(), CoreError> {
        let delivered = self.ws_manager.broadcast(update_message()).await;
        tracing::debug!(delivered, "Broadcast lesson table update");
        Ok(())
    }
}
