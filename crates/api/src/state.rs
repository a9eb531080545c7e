use std::sync::Arc;

use timetable_core::lesson_table_service::LessonTableService;
use timetable_db::stores::{PgLessonTableBackupStore, PgLessonTableStore};

use crate::config::ServerConfig;
use crate::ws::{WsManager, WsUpdateNotifier};

/// The lesson table service as wired in the running server: Postgres
/// partitions plus WebSocket broadcast.
pub type LessonTables =
    LessonTableService<PgLessonTableStore, PgLessonTableBackupStore, WsUpdateNotifier>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: timetable_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (browser clients).
    pub ws_manager: Arc<WsManager>,
    /// Lesson table orchestration (update, backup, restore, notify).
    pub lesson_tables: Arc<LessonTables>,
}

impl AppState {
    /// Wire the lesson table service to `pool` and `ws_manager`.
    pub fn new(pool: timetable_db::DbPool, config: ServerConfig, ws_manager: Arc<WsManager>) -> Self {
        let lesson_tables = LessonTableService::new(
            PgLessonTableStore::new(pool.clone()),
            PgLessonTableBackupStore::new(pool.clone()),
            WsUpdateNotifier::new(Arc::clone(&ws_manager)),
        );

        Self {
            pool,
            config: Arc::new(config),
            ws_manager,
            lesson_tables: Arc::new(lesson_tables),
        }
    }
}
