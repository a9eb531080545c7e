//! Handlers for the `/lesson-tables` resource.
//!
//! Everything except the listing goes through the lesson table service, so
//! writes (PUT, restore) notify WebSocket clients.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use timetable_core::day_of_week::DayOfWeek;
use timetable_core::error::CoreError;
use timetable_core::lesson_table::{validate_lesson_table, LessonTable};
use timetable_db::models::lesson_table::UpdateLessonTable;
use timetable_db::repositories::LessonTableRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

fn parse_day(raw: &str) -> AppResult<DayOfWeek> {
    Ok(raw.parse::<DayOfWeek>()?)
}

/// GET /api/v1/lesson-tables
///
/// Every stored day, Monday first. Days never written are omitted.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LessonTable>>> {
    let tables = LessonTableRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(LessonTable::from)
        .collect();
    Ok(Json(tables))
}

/// GET /api/v1/lesson-tables/{day}
pub async fn get_by_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> AppResult<Json<LessonTable>> {
    let day = parse_day(&day)?;
    let table = state
        .lesson_tables
        .get_lesson_table_by_day_of_week(day)
        .await?;
    Ok(Json(table))
}

/// PUT /api/v1/lesson-tables/{day}
///
/// Replaces the day's lessons and notifies connected clients.
pub async fn update(
    State(state): State<AppState>,
    Path(day): Path<String>,
    AppJson(input): AppJson<UpdateLessonTable>,
) -> AppResult<StatusCode> {
    let day = parse_day(&day)?;
    let table = input.into_table(day);
    validate_lesson_table(&table)?;
    state.lesson_tables.update_lesson_table(&table).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/lesson-tables/{day}/backup
pub async fn backup(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> AppResult<StatusCode> {
    let day = parse_day(&day)?;
    state.lesson_tables.make_lesson_table_backup(day).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/lesson-tables/{day}/restore
///
/// Returns the restored table, or 404 when the day has no backup.
pub async fn restore(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> AppResult<Json<LessonTable>> {
    let day = parse_day(&day)?;
    let restored = state
        .lesson_tables
        .restore_lesson_table_from_backup(day)
        .await?
        .ok_or_else(|| CoreError::not_found("LessonTableBackup", day))?;
    Ok(Json(restored))
}
