//! Handlers for the `/lessons` resource.
//!
//! Request bodies are validated before the lesson is looked up, so a bad
//! body is a 400 even for an unknown ID. IDs that are not integers cannot
//! name a lesson and are reported as 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use timetable_core::error::CoreError;
use timetable_core::types::DbId;
use timetable_db::models::lesson::{CreateLesson, Lesson, UpdateLesson};
use timetable_db::repositories::LessonRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn lesson_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::not_found("Lesson", id))
}

fn parse_lesson_id(raw: &str) -> AppResult<DbId> {
    raw.parse::<DbId>().map_err(|_| lesson_not_found(raw))
}

/// GET /api/v1/lessons
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Lesson>>> {
    let lessons = LessonRepo::list(&state.pool).await?;
    Ok(Json(lessons))
}

/// POST /api/v1/lessons
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLesson>,
) -> AppResult<Json<Lesson>> {
    input.validate()?;
    let lesson = LessonRepo::create(&state.pool, &input).await?;
    tracing::info!(lesson_id = lesson.id, "Lesson created");
    Ok(Json(lesson))
}

/// GET /api/v1/lessons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Lesson>> {
    let id = parse_lesson_id(&raw_id)?;
    let lesson = LessonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| lesson_not_found(&raw_id))?;
    Ok(Json(lesson))
}

/// PUT /api/v1/lessons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(input): AppJson<UpdateLesson>,
) -> AppResult<StatusCode> {
    input.validate()?;
    let id = parse_lesson_id(&raw_id)?;
    LessonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| lesson_not_found(&raw_id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/lessons/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_lesson_id(&raw_id)?;
    if LessonRepo::delete(&state.pool, id).await? {
        tracing::info!(lesson_id = id, "Lesson deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(lesson_not_found(&raw_id))
    }
}
