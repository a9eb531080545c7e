use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::state::AppState;
use crate::ws::manager::WsManager;

/// GET /api/v1/ws
///
/// Subscribes the client to lesson table update frames.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| serve_subscriber(socket, state.ws_manager))
}

/// Run one subscriber until either direction ends.
///
/// Outbound frames come from the manager channel; inbound frames are only
/// read to notice Close. Whichever half finishes first cancels the other.
async fn serve_subscriber(socket: WebSocket, ws_manager: Arc<WsManager>) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    let outbound = ws_manager.add(conn_id.clone()).await;
    tracing::info!(conn_id = %conn_id, "Timetable subscriber connected");

    let (sink, stream) = socket.split();
    let mut forward = tokio::spawn(forward_frames(outbound, sink));
    let mut watch = tokio::spawn(watch_for_close(stream));

    tokio::select! {
        _ = &mut forward => watch.abort(),
        _ = &mut watch => forward.abort(),
    }

    match ws_manager.remove(&conn_id).await {
        Some(connected_at) => {
            let secs = (chrono::Utc::now() - connected_at).num_seconds();
            tracing::info!(conn_id = %conn_id, secs, "Timetable subscriber disconnected");
        }
        // Already dropped by shutdown_all.
        None => tracing::debug!(conn_id = %conn_id, "Subscriber closed during shutdown"),
    }
}

async fn forward_frames(
    mut outbound: UnboundedReceiver<Message>,
    mut sink: SplitSink<WebSocket, Message>,
) {
    while let Some(frame) = outbound.recv().await {
        let closing = matches!(frame, Message::Close(_));
        if sink.send(frame).await.is_err() || closing {
            break;
        }
    }
}

async fn watch_for_close(mut stream: SplitStream<WebSocket>) {
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(error = %e, "WebSocket receive error");
                break;
            }
        }
    }
}
