//! Read, update, backup, and restore of per-weekday lesson tables.
//!
//! [`LessonTableService`] owns no data. It sequences calls to three
//! collaborators injected at construction:
//!
//! - [`LessonTableRepository`]: the primary lesson tables.
//! - [`LessonTableBackupRepository`]: one snapshot per day.
//! - [`UpdateNotifier`]: broadcasts a payload-free "updated" signal.
//!
//! Every mutation of the primary tables made through the service is
//! followed by exactly one notification. Collaborator errors are returned
//! unchanged.

use async_trait::async_trait;

use crate::day_of_week::DayOfWeek;
use crate::error::CoreError;
use crate::lesson_table::LessonTable;

// ---------------------------------------------------------------------------
// Collaborator contracts
// ---------------------------------------------------------------------------

/// Primary storage for lesson tables, keyed by day.
#[async_trait]
pub trait LessonTableRepository: Send + Sync {
    /// Fetch the table for `day`. Absence is reported as
    /// [`CoreError::NotFound`].
    async fn get_by_day(&self, day: DayOfWeek) -> Result<LessonTable, CoreError>;

    /// Replace the table for `table.day_of_week`, creating it if needed.
    async fn update(&self, table: &LessonTable) -> Result<(), CoreError>;
}

/// Snapshot storage, one lesson table per day.
#[async_trait]
pub trait LessonTableBackupRepository: Send + Sync {
    async fn get_by_day(&self, day: DayOfWeek) -> Result<Option<LessonTable>, CoreError>;

    /// Store `table` as the snapshot for its day, overwriting any previous one.
    async fn create(&self, table: &LessonTable) -> Result<(), CoreError>;
}

/// Pushes an "updated" signal to every connected client.
#[async_trait]
pub trait UpdateNotifier: Send + Sync {
    async fn notify_all_clients_about_update(&self) -> Result<(), CoreError>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Stateless orchestration over lesson table storage and client notification.
pub struct LessonTableService<R, B, N> {
    repository: R,
    backup_repository: B,
    notifier: N,
}

impl<R, B, N> LessonTableService<R, B, N>
where
    R: LessonTableRepository,
    B: LessonTableBackupRepository,
    N: UpdateNotifier,
{
    pub fn new(repository: R, backup_repository: B, notifier: N) -> Self {
        Self {
            repository,
            backup_repository,
            notifier,
        }
    }

    /// Return the stored table for `day` exactly as the repository hands it over.
    pub async fn get_lesson_table_by_day_of_week(
        &self,
        day: DayOfWeek,
    ) -> Result<LessonTable, CoreError> {
        self.repository.get_by_day(day).await
    }

    /// Persist `table`, then notify clients.
    ///
    /// The notification is only sent once the repository call has returned
    /// successfully.
    pub async fn update_lesson_table(&self, table: &LessonTable) -> Result<(), CoreError> {
        self.repository.update(table).await?;
        tracing::info!(
            day = %table.day_of_week,
            lessons = table.lessons.len(),
            "Lesson table updated"
        );
        self.notifier.notify_all_clients_about_update().await
    }

    /// Copy the current table for `day` into the backup store.
    ///
    /// Does not notify clients; the primary tables are untouched.
    pub async fn make_lesson_table_backup(&self, day: DayOfWeek) -> Result<(), CoreError> {
        let table = self.repository.get_by_day(day).await?;
        self.backup_repository.create(&table).await?;
        tracing::info!(day = %day, "Lesson table backup saved");
        Ok(())
    }

    /// Overwrite the table for `day` with its backup.
    ///
    /// Returns `Ok(None)` without touching the primary tables or notifying
    /// anyone when no backup exists.
    pub async fn restore_lesson_table_from_backup(
        &self,
        day: DayOfWeek,
    ) -> Result<Option<LessonTable>, CoreError> {
        let Some(backup) = self.backup_repository.get_by_day(day).await? else {
            tracing::debug!(day = %day, "No lesson table backup to restore");
            return Ok(None);
        };

        self.update_lesson_table(&backup).await?;
        tracing::info!(day = %day, "Lesson table restored from backup");
        Ok(Some(backup))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
