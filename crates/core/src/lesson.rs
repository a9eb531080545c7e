//! Lesson name constraints shared by the lesson list and lesson tables.

use crate::error::CoreError;

/// Maximum length of a lesson name, in characters.
pub const MAX_LESSON_NAME_LEN: usize = 40;

/// Validate a lesson name: non-blank and at most [`MAX_LESSON_NAME_LEN`]
/// characters.
pub fn validate_lesson_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "lesson name must not be empty".to_string(),
        ));
    }
    let len = name.chars().count();
    if len > MAX_LESSON_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "lesson name must be at most {MAX_LESSON_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(())
}
