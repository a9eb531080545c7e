//! Route definitions for weekly lesson tables.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lesson_table;
use crate::state::AppState;

/// Lesson table routes mounted at `/lesson-tables`.
///
/// ```text
/// GET    /                 -> list
/// GET    /{day}            -> get_by_day
/// PUT    /{day}            -> update
/// POST   /{day}/backup     -> backup
/// POST   /{day}/restore    -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lesson_table::list))
        .route(
            "/{day}",
            get(lesson_table::get_by_day).put(lesson_table::update),
        )
        .route("/{day}/backup", post(lesson_table::backup))
        .route("/{day}/restore", post(lesson_table::restore))
}
