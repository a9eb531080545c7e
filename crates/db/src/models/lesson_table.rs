//! Row models for `lesson_tables` and `lesson_table_backups`.
//!
//! Both tables share one row shape; the domain value is
//! [`LessonTable`](timetable_core::lesson_table::LessonTable).

use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;
use timetable_core::day_of_week::DayOfWeek;
use timetable_core::lesson_table::{LessonTable, ScheduledLesson};
use timetable_core::types::Timestamp;

/// A row from `lesson_tables` or `lesson_table_backups`.
#[derive(Debug, Clone, FromRow)]
pub struct LessonTableRow {
    #[sqlx(try_from = "String")]
    pub day_of_week: DayOfWeek,
    pub lessons: Json<Vec<ScheduledLesson>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<LessonTableRow> for LessonTable {
    fn from(row: LessonTableRow) -> Self {
        LessonTable::new(row.day_of_week, row.lessons.0)
    }
}

/// Request body for replacing a day's lessons. The day comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLessonTable {
    pub lessons: Vec<ScheduledLesson>,
}

impl UpdateLessonTable {
    pub fn into_table(self, day_of_week: DayOfWeek) -> LessonTable {
        LessonTable::new(day_of_week, self.lessons)
    }
}
