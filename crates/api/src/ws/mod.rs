//! WebSocket infrastructure for pushing lesson table updates.
//!
//! Provides connection management, heartbeat monitoring, the HTTP upgrade
//! handler used by Axum routes, and the notifier the lesson table service
//! broadcasts through.

mod handler;
mod heartbeat;
pub mod manager;
mod notifier;

pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
pub use notifier::{update_message, WsUpdateNotifier, UPDATE_FRAME};
