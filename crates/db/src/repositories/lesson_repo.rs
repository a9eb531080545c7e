//! Repository for the `lessons` table.

use sqlx::PgPool;
use timetable_core::types::DbId;

use crate::models::lesson::{CreateLesson, Lesson, UpdateLesson};

/// Column list for `lessons` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// List all lessons, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons ORDER BY id");
        sqlx::query_as::<_, Lesson>(&query).fetch_all(pool).await
    }

    /// Find a lesson by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new lesson, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLesson) -> Result<Lesson, sqlx::Error> {
        let query = format!("INSERT INTO lessons (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Update a lesson. Returns `None` if no lesson has this ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLesson,
    ) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!(
            "UPDATE lessons SET name = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lesson by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
