pub mod health;
pub mod lesson;
pub mod lesson_table;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                                  WebSocket (update push)
///
/// /lessons                             list, create
/// /lessons/{id}                        get, update, delete
///
/// /lesson-tables                       list stored days
/// /lesson-tables/{day}                 get, replace (notifies)
/// /lesson-tables/{day}/backup          snapshot primary into backup (POST)
/// /lesson-tables/{day}/restore         restore from backup (POST, notifies)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // WebSocket endpoint.
        .route("/ws", get(ws::ws_handler))
        // Lesson list.
        .nest("/lessons", lesson::router())
        // Weekly lesson tables with backup/restore.
        .nest("/lesson-tables", lesson_table::router())
}
