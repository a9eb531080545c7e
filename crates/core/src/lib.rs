//! Timetable domain core.
//!
//! Shared types, the domain error, weekday keys, lesson table values and
//! their validation, and [`lesson_table_service::LessonTableService`], the
//! orchestration layer that sits between the HTTP handlers and the
//! storage and notification collaborators.

pub mod day_of_week;
pub mod error;
pub mod lesson;
pub mod lesson_table;
pub mod lesson_table_service;
pub mod types;
