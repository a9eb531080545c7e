//! Lesson list models and DTOs.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timetable_core::error::CoreError;
use timetable_core::lesson::validate_lesson_name;
use timetable_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError};

/// A row from the `lessons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lesson.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLesson {
    #[validate(custom(function = "lesson_name"))]
    pub name: String,
}

/// DTO for updating a lesson. The name is replaced wholesale.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLesson {
    #[validate(custom(function = "lesson_name"))]
    pub name: String,
}

/// Same rule as names inside a lesson table.
fn lesson_name(name: &str) -> Result<(), ValidationError> {
    validate_lesson_name(name).map_err(|err| {
        let message = match err {
            CoreError::Validation(msg) => msg,
            other => other.to_string(),
        };
        ValidationError::new("lesson_name").with_message(Cow::Owned(message))
    })
}
