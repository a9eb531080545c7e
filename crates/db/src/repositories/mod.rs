//! Repository layer: one zero-sized struct per table, async functions taking
//! the pool explicitly.

pub mod lesson_repo;
pub mod lesson_table_repo;

pub use lesson_repo::LessonRepo;
pub use lesson_table_repo::{LessonTableBackupRepo, LessonTableRepo};
