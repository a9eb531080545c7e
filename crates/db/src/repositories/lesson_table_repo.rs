//! Repositories for `lesson_tables` and its backup partition
//! `lesson_table_backups`.
//!
//! Both tables have the same shape, so the queries are shared and
//! parameterized by table name. Writes are upserts keyed by `day_of_week`.

use sqlx::types::Json;
use sqlx::PgPool;
use timetable_core::day_of_week::DayOfWeek;
use timetable_core::lesson_table::LessonTable;

use crate::models::lesson_table::LessonTableRow;

/// Column list shared by both lesson table partitions.
const COLUMNS: &str = "day_of_week, lessons, created_at, updated_at";

const PRIMARY_TABLE: &str = "lesson_tables";
const BACKUP_TABLE: &str = "lesson_table_backups";

/// Data access for the primary lesson tables.
pub struct LessonTableRepo;

impl LessonTableRepo {
    /// Find the table for a day. Returns `None` if it was never written.
    pub async fn find_by_day(
        pool: &PgPool,
        day: DayOfWeek,
    ) -> Result<Option<LessonTableRow>, sqlx::Error> {
        find_by_day(pool, PRIMARY_TABLE, day).await
    }

    /// List every stored day, Monday first.
    pub async fn list(pool: &PgPool) -> Result<Vec<LessonTableRow>, sqlx::Error> {
        let mut rows = list(pool, PRIMARY_TABLE).await?;
        rows.sort_by_key(|row| row.day_of_week);
        Ok(rows)
    }

    /// Insert or replace the lessons for `table.day_of_week`.
    pub async fn upsert(pool: &PgPool, table: &LessonTable) -> Result<LessonTableRow, sqlx::Error> {
        upsert(pool, PRIMARY_TABLE, table).await
    }
}

/// Data access for the lesson table backup partition.
pub struct LessonTableBackupRepo;

impl LessonTableBackupRepo {
    /// Find the backup for a day, if one was taken.
    pub async fn find_by_day(
        pool: &PgPool,
        day: DayOfWeek,
    ) -> Result<Option<LessonTableRow>, sqlx::Error> {
        find_by_day(pool, BACKUP_TABLE, day).await
    }

    /// Store a snapshot, replacing any earlier snapshot of the same day.
    pub async fn upsert(pool: &PgPool, table: &LessonTable) -> Result<LessonTableRow, sqlx::Error> {
        upsert(pool, BACKUP_TABLE, table).await
    }
}

async fn find_by_day(
    pool: &PgPool,
    table_name: &str,
    day: DayOfWeek,
) -> Result<Option<LessonTableRow>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM {table_name} WHERE day_of_week = $1");
    sqlx::query_as::<_, LessonTableRow>(&query)
        .bind(day.as_str())
        .fetch_optional(pool)
        .await
}

async fn list(pool: &PgPool, table_name: &str) -> Result<Vec<LessonTableRow>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM {table_name}");
    sqlx::query_as::<_, LessonTableRow>(&query)
        .fetch_all(pool)
        .await
}

/// Uses `ON CONFLICT (day_of_week) DO UPDATE` so repeated writes replace the
/// row instead of failing.
async fn upsert(
    pool: &PgPool,
    table_name: &str,
    table: &LessonTable,
) -> Result<LessonTableRow, sqlx::Error> {
    let query = format!(
        "INSERT INTO {table_name} (day_of_week, lessons) \
         VALUES ($1, $2) \
         ON CONFLICT (day_of_week) DO UPDATE SET \
             lessons = EXCLUDED.lessons, \
             updated_at = now() \
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, LessonTableRow>(&query)
        .bind(table.day_of_week.as_str())
        .bind(Json(&table.lessons))
        .fetch_one(pool)
        .await
}
