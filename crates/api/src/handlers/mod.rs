//! Request handlers.
//!
//! Lesson list handlers delegate to the `timetable_db` repositories; lesson
//! table handlers go through the lesson table service in [`AppState`](crate::state::AppState).
//! Errors are mapped via [`AppError`](crate::error::AppError).

pub mod lesson;
pub mod lesson_table;
