//! Route definitions for the lesson list.

use axum::routing::get;
use axum::Router;

use crate::handlers::lesson;
use crate::state::AppState;

/// Lesson routes mounted at `/lessons`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lesson::list).post(lesson::create))
        .route(
            "/{id}",
            get(lesson::get_by_id)
                .put(lesson::update)
                .delete(lesson::delete),
        )
}
