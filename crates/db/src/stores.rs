//! Postgres-backed collaborators for
//! [`LessonTableService`](timetable_core::lesson_table_service::LessonTableService).
//!
//! Errors from sqlx are wrapped in [`CoreError::Storage`] untouched so the
//! HTTP layer can still classify them. A missing primary row becomes
//! [`CoreError::NotFound`]; a missing backup row is `None`.

use async_trait::async_trait;
use timetable_core::day_of_week::DayOfWeek;
use timetable_core::error::CoreError;
use timetable_core::lesson_table::LessonTable;
use timetable_core::lesson_table_service::{LessonTableBackupRepository, LessonTableRepository};

use crate::repositories::{LessonTableBackupRepo, LessonTableRepo};
use crate::DbPool;

/// Primary lesson tables in `lesson_tables`.
#[derive(Clone)]
pub struct PgLessonTableStore {
    pool: DbPool,
}

impl PgLessonTableStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LessonTableRepository for PgLessonTableStore {
    async fn get_by_day(&self, day: DayOfWeek) -> Result<LessonTable, CoreError> {
        LessonTableRepo::find_by_day(&self.pool, day)
            .await
            .map_err(CoreError::storage)?
            .map(LessonTable::from)
            .ok_or_else(|| CoreError::not_found("LessonTable", day))
    }

    async fn update(&self, table: &LessonTable) -> Result<(), CoreError> {
        LessonTableRepo::upsert(&self.pool, table)
            .await
            .map_err(CoreError::storage)?;
        Ok(())
    }
}

/// Backup snapshots in `lesson_table_backups`.
#[derive(Clone)]
pub struct PgLessonTableBackupStore {
    pool: DbPool,
}

impl PgLessonTableBackupStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LessonTableBackupRepository for PgLessonTableBackupStore {
    async fn get_by_day(&self, day: DayOfWeek) -> Result<Option<LessonTable>, CoreError> {
        let row = LessonTableBackupRepo::find_by_day(&self.pool, day)
            .await
            .map_err(CoreError::storage)?;
        Ok(row.map(LessonTable::from))
    }

    async fn create(&self, table: &LessonTable) -> Result<(), CoreError> {
        LessonTableBackupRepo::upsert(&self.pool, table)
            .await
            .map_err(CoreError::storage)?;
        tracing::debug!(day = %table.day_of_week, "Lesson table snapshot written");
        Ok(())
    }
}
