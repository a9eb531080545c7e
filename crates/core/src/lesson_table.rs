//! The per-weekday lesson table value and its validation.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::day_of_week::DayOfWeek;
use crate::error::CoreError;
use crate::lesson::validate_lesson_name;

/// A single lesson slot inside a [`LessonTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledLesson {
    pub name: String,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    #[serde(default)]
    pub classroom: Option<String>,
}

/// The lessons scheduled for one day of the week.
///
/// Compared by value: two tables are equal when their day and lesson
/// sequence match field for field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonTable {
    pub day_of_week: DayOfWeek,
    pub lessons: Vec<ScheduledLesson>,
}

impl LessonTable {
    pub fn new(day_of_week: DayOfWeek, lessons: Vec<ScheduledLesson>) -> Self {
        Self {
            day_of_week,
            lessons,
        }
    }

    /// A table with no lessons for `day_of_week`.
    pub fn empty(day_of_week: DayOfWeek) -> Self {
        Self::new(day_of_week, Vec::new())
    }
}

/// Validate every lesson in a table.
///
/// Each lesson needs a valid name and must start strictly before it ends.
/// Overlaps between lessons are not checked.
pub fn validate_lesson_table(table: &LessonTable) -> Result<(), CoreError> {
    for (index, lesson) in table.lessons.iter().enumerate() {
        validate_lesson_name(&lesson.name)
            .map_err(|e| CoreError::Validation(format!("lessons[{index}]: {e}")))?;
        if lesson.starts_at >= lesson.ends_at {
            return Err(CoreError::Validation(format!(
                "lessons[{index}]: starts_at ({}) must be before ends_at ({})",
                lesson.starts_at, lesson.ends_at
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn lesson(name: &str, start: (u32, u32), end: (u32, u32)) -> ScheduledLesson {
        ScheduledLesson {
            name: name.to_string(),
            starts_at: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            ends_at: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            classroom: None,
        }
    }

    #[test]
    fn empty_table_is_valid() {
        assert!(validate_lesson_table(&LessonTable::empty(DayOfWeek::Monday)).is_ok());
    }

    #[test]
    fn ordered_lessons_are_valid() {
        let table = LessonTable::new(
            DayOfWeek::Tuesday,
            vec![lesson("Math", (8, 0), (8, 45)), lesson("Physics", (9, 0), (9, 45))],
        );
        assert!(validate_lesson_table(&table).is_ok());
    }

    #[test]
    fn lesson_ending_before_start_is_rejected() {
        let table = LessonTable::new(DayOfWeek::Monday, vec![lesson("Math", (10, 0), (9, 0))]);
        assert_matches!(
            validate_lesson_table(&table),
            Err(CoreError::Validation(msg)) if msg.starts_with("lessons[0]")
        );
    }

    #[test]
    fn zero_length_lesson_is_rejected() {
        let table = LessonTable::new(DayOfWeek::Monday, vec![lesson("Math", (10, 0), (10, 0))]);
        assert!(validate_lesson_table(&table).is_err());
    }

    #[test]
    fn bad_name_reports_index() {
        let table = LessonTable::new(
            DayOfWeek::Friday,
            vec![lesson("Art", (8, 0), (9, 0)), lesson("", (9, 0), (10, 0))],
        );
        assert_matches!(
            validate_lesson_table(&table),
            Err(CoreError::Validation(msg)) if msg.starts_with("lessons[1]")
        );
    }

    #[test]
    fn equality_is_by_value() {
        let a = LessonTable::new(DayOfWeek::Monday, vec![lesson("Math", (8, 0), (9, 0))]);
        let b = LessonTable::new(DayOfWeek::Monday, vec![lesson("Math", (8, 0), (9, 0))]);
        let c = LessonTable::new(DayOfWeek::Sunday, vec![lesson("Math", (8, 0), (9, 0))]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn classroom_defaults_to_none() {
        let parsed: ScheduledLesson = serde_json::from_str(
            r#"{"name":"Math","starts_at":"08:00:00","ends_at":"08:45:00"}"#,
        )
        .unwrap();
        assert_eq!(parsed.classroom, None);
    }
}
